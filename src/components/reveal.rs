use yew::prelude::*;
use yew_hooks::use_visible;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a block that should fade in the first time it scrolls into the
/// viewport. Once revealed it stays revealed.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible(node.clone(), false);
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible {
                    revealed.set(true);
                }
                || ()
            },
            visible,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.class.clone(),
                (*revealed).then(|| "fade-in-up")
            )}
        >
            { props.children.clone() }
        </div>
    }
}
