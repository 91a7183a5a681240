#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8080"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn form_endpoint(form: &str) -> String {
    format!("{}/api/forms/{}", get_backend_url(), form)
}
