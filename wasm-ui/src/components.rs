//! UI components for the demo page.

use playground_rs::{Action, Animator, EventKind, ResultAnimation, Role, Row, Timings, action_for};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom::{replay_animation, run_effect};

/// Summary rows shown in a result region.
#[derive(Clone, PartialEq, Default)]
pub struct ResultView {
    pub rows: Vec<Row>,
    /// Changes on every write so the entrance animation replays.
    pub generation: u64,
}

/// Output region that replays its entrance animation on every update.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub role: Role,
    pub view: ResultView,
    pub animation: ResultAnimation,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        let animation = props.animation;
        use_effect_with(props.view.generation, move |generation| {
            if *generation > 0 {
                match node.cast::<HtmlElement>() {
                    Some(el) => {
                        if let Err(e) = replay_animation(&el, animation) {
                            gloo::console::warn!("replay failed", e);
                        }
                    }
                    None => gloo::console::warn!("result region not mounted"),
                }
            }
            || ()
        });
    }

    html! {
        <div id={props.role.id()} class="result" ref={node}>
            { for props.view.rows.iter().map(|row| html! {
                <>
                    <strong>{ format!("{}:", row.label) }</strong>
                    { " " }{ &row.value }
                    <br />
                </>
            })}
        </div>
    }
}

/// Clickable box that briefly scales up when pressed.
#[derive(Properties, PartialEq)]
pub struct AnimatedBoxProps {
    pub label: AttrValue,
    /// Extra class selecting the box's idle CSS animation.
    #[prop_or_default]
    pub variant: Classes,
}

#[function_component(AnimatedBox)]
pub fn animated_box(props: &AnimatedBoxProps) -> Html {
    let node = use_node_ref();
    let animator = use_mut_ref(Animator::new);

    let onclick = {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            let press = action_for(EventKind::Click, Role::AnimatedBox).and_then(Action::effect);
            if let Some(effect) = press
                && let Some(el) = node.cast::<HtmlElement>()
            {
                run_effect(el, animator.clone(), effect, &Timings::default());
            }
        })
    };

    html! {
        <div class={classes!("animated-box", props.variant.clone())} ref={node} {onclick}>
            { &*props.label }
        </div>
    }
}

/// Styled button. Secondary buttons pulse when clicked.
#[derive(Properties, PartialEq)]
pub struct FancyButtonProps {
    pub role: Role,
    pub label: AttrValue,
    #[prop_or_default]
    pub secondary: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(FancyButton)]
pub fn fancy_button(props: &FancyButtonProps) -> Html {
    let node = use_node_ref();
    let animator = use_mut_ref(Animator::new);

    let onclick = {
        let node = node.clone();
        let secondary = props.secondary;
        let inner = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            let pulse = action_for(EventKind::Click, Role::SecondaryButton)
                .and_then(Action::effect)
                .filter(|_| secondary);
            if let Some(effect) = pulse
                && let Some(el) = node.cast::<HtmlElement>()
            {
                run_effect(el, animator.clone(), effect, &Timings::default());
            }
            inner.emit(e);
        })
    };

    html! {
        <button
            id={props.role.id()}
            class={classes!("fancy-btn", props.secondary.then_some("secondary"))}
            ref={node}
            {onclick}
        >
            { &*props.label }
        </button>
    }
}
