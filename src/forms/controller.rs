use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notification::{use_notifier, NotificationKind, Notifier};
use crate::forms::gateway::{self, SubmissionError};
use crate::forms::validator::{validate, FormFields, FormKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSubmissionState {
    Idle,
    Validating,
    Submitting,
    Done,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    Submitted(FormFields),
    GatewayFinished(Result<(), SubmissionError>),
}

/// Instructions for the UI layer, produced by [`FormMachine::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum FormEffect {
    Notify {
        message: String,
        kind: NotificationKind,
    },
    StartSubmission(FormFields),
    ResetFields,
}

/// Per-form submission pipeline: read fields, validate, hand off to the
/// gateway, surface the outcome. Pure command-in/effects-out so the same
/// machine drives every form on the site.
pub struct FormMachine {
    kind: FormKind,
    success_message: String,
    state: FormSubmissionState,
}

impl FormMachine {
    pub fn new(kind: FormKind, success_message: impl Into<String>) -> Self {
        Self {
            kind,
            success_message: success_message.into(),
            state: FormSubmissionState::Idle,
        }
    }

    pub fn state(&self) -> FormSubmissionState {
        self.state
    }

    pub fn handle(&mut self, event: FormEvent) -> Vec<FormEffect> {
        match (self.state, event) {
            (FormSubmissionState::Idle, FormEvent::Submitted(fields)) => {
                self.state = FormSubmissionState::Validating;
                let result = validate(self.kind, &fields);
                if result.ok {
                    self.state = FormSubmissionState::Submitting;
                    vec![FormEffect::StartSubmission(fields)]
                } else {
                    // Fields stay untouched so the visitor can correct them.
                    self.state = FormSubmissionState::Idle;
                    vec![FormEffect::Notify {
                        message: result.errors.join("\n"),
                        kind: NotificationKind::Error,
                    }]
                }
            }
            (FormSubmissionState::Submitting, FormEvent::GatewayFinished(Ok(()))) => {
                self.state = FormSubmissionState::Done;
                vec![
                    FormEffect::Notify {
                        message: self.success_message.clone(),
                        kind: NotificationKind::Success,
                    },
                    FormEffect::ResetFields,
                ]
            }
            (FormSubmissionState::Submitting, FormEvent::GatewayFinished(Err(error))) => {
                self.state = FormSubmissionState::Done;
                vec![FormEffect::Notify {
                    message: error.to_string(),
                    kind: NotificationKind::Error,
                }]
            }
            // A second submit while one is in flight, or a stale gateway
            // completion, changes nothing.
            _ => Vec::new(),
        }
    }

    /// Returns the machine to `Idle` once the UI has applied the
    /// completion effects.
    pub fn acknowledge(&mut self) {
        if self.state == FormSubmissionState::Done {
            self.state = FormSubmissionState::Idle;
        }
    }
}

pub struct FormControllerHandle {
    pub submitting: bool,
    pub on_submit: Callback<FormFields>,
}

#[hook]
pub fn use_form_machine(
    kind: FormKind,
    success_message: &'static str,
    on_reset: Callback<()>,
) -> FormControllerHandle {
    let notifier = use_notifier();
    let submitting = use_state(|| false);
    let machine = use_mut_ref(|| FormMachine::new(kind, success_message));

    let on_submit = {
        let notifier = notifier.clone();
        let submitting = submitting.clone();
        let machine = machine.clone();
        let on_reset = on_reset.clone();
        Callback::from(move |fields: FormFields| {
            let effects = machine.borrow_mut().handle(FormEvent::Submitted(fields));
            for effect in effects {
                match effect {
                    FormEffect::StartSubmission(fields) => {
                        let notifier = notifier.clone();
                        let submitting = submitting.clone();
                        let machine = machine.clone();
                        let on_reset = on_reset.clone();
                        spawn_local(async move {
                            let outcome = gateway::submit(kind, &fields).await;
                            let effects =
                                machine.borrow_mut().handle(FormEvent::GatewayFinished(outcome));
                            apply_completion_effects(effects, &notifier, &on_reset);
                            machine.borrow_mut().acknowledge();
                            submitting.set(false);
                        });
                    }
                    other => apply_completion_effects(vec![other], &notifier, &on_reset),
                }
            }
            submitting.set(machine.borrow().state() == FormSubmissionState::Submitting);
        })
    };

    FormControllerHandle {
        submitting: *submitting,
        on_submit,
    }
}

fn apply_completion_effects(effects: Vec<FormEffect>, notifier: &Notifier, on_reset: &Callback<()>) {
    for effect in effects {
        match effect {
            FormEffect::Notify { message, kind } => {
                notifier.notify(message, kind);
            }
            FormEffect::ResetFields => on_reset.emit(()),
            FormEffect::StartSubmission(_) => {}
        }
    }
}

/// Collects controlled input values into the field map handed to the
/// validator and gateway.
pub fn collect_fields(pairs: &[(&str, &str)]) -> FormFields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact_fields() -> FormFields {
        collect_fields(&[
            ("firstName", "Al"),
            ("lastName", "Li"),
            ("email", "a@b.co"),
            ("phone", "1234567890"),
            ("subject", "general"),
        ])
    }

    #[test]
    fn contact_submission_runs_to_success() {
        let mut machine = FormMachine::new(FormKind::Contact, "Message sent successfully!");
        assert_eq!(machine.state(), FormSubmissionState::Idle);

        let effects = machine.handle(FormEvent::Submitted(valid_contact_fields()));
        assert_eq!(
            effects,
            vec![FormEffect::StartSubmission(valid_contact_fields())]
        );
        assert_eq!(machine.state(), FormSubmissionState::Submitting);

        let effects = machine.handle(FormEvent::GatewayFinished(Ok(())));
        assert_eq!(
            effects,
            vec![
                FormEffect::Notify {
                    message: "Message sent successfully!".to_string(),
                    kind: NotificationKind::Success,
                },
                FormEffect::ResetFields,
            ]
        );
        assert_eq!(machine.state(), FormSubmissionState::Done);

        machine.acknowledge();
        assert_eq!(machine.state(), FormSubmissionState::Idle);
    }

    #[test]
    fn invalid_callback_stays_idle_with_joined_errors() {
        let mut machine = FormMachine::new(FormKind::Callback, "Callback request sent successfully!");
        let effects = machine.handle(FormEvent::Submitted(collect_fields(&[
            ("name", "A"),
            ("phone", "123"),
            ("email", "bad"),
        ])));

        assert_eq!(
            effects,
            vec![FormEffect::Notify {
                message: "Name must be at least 2 characters\n\
                          Please enter a valid phone number\n\
                          Please enter a valid email address"
                    .to_string(),
                kind: NotificationKind::Error,
            }]
        );
        assert_eq!(machine.state(), FormSubmissionState::Idle);
    }

    #[test]
    fn resubmit_while_submitting_is_ignored() {
        let mut machine = FormMachine::new(FormKind::Contact, "Message sent successfully!");
        machine.handle(FormEvent::Submitted(valid_contact_fields()));
        assert_eq!(machine.state(), FormSubmissionState::Submitting);

        let effects = machine.handle(FormEvent::Submitted(valid_contact_fields()));
        assert!(effects.is_empty());
        assert_eq!(machine.state(), FormSubmissionState::Submitting);
    }

    #[test]
    fn gateway_failure_notifies_without_resetting_fields() {
        let mut machine = FormMachine::new(FormKind::Newsletter, "Successfully subscribed to newsletter!");
        machine.handle(FormEvent::Submitted(collect_fields(&[("email", "a@b.c")])));

        let effects = machine.handle(FormEvent::GatewayFinished(Err(
            SubmissionError::Rejected {
                reason: "address already subscribed".to_string(),
            },
        )));
        assert_eq!(
            effects,
            vec![FormEffect::Notify {
                message: "Submission failed: address already subscribed. Please try again."
                    .to_string(),
                kind: NotificationKind::Error,
            }]
        );
        assert!(!effects.contains(&FormEffect::ResetFields));

        machine.acknowledge();
        assert_eq!(machine.state(), FormSubmissionState::Idle);
    }

    #[test]
    fn stale_gateway_completion_in_idle_is_ignored() {
        let mut machine = FormMachine::new(FormKind::Contact, "Message sent successfully!");
        let effects = machine.handle(FormEvent::GatewayFinished(Ok(())));
        assert!(effects.is_empty());
        assert_eq!(machine.state(), FormSubmissionState::Idle);
    }

    #[test]
    fn acknowledge_outside_done_is_a_no_op() {
        let mut machine = FormMachine::new(FormKind::Contact, "Message sent successfully!");
        machine.handle(FormEvent::Submitted(valid_contact_fields()));
        machine.acknowledge();
        assert_eq!(machine.state(), FormSubmissionState::Submitting);
    }
}
