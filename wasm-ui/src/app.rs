//! Main application component.
//!
//! All page state lives in a core `Page`. Handlers dispatch actions to it
//! and a [`Driver`] carries out the returned commands against the DOM and
//! browser timers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use playground_rs::{Action, Command, EventKind, Host, Page, ResultAnimation, Role, action_for};
use web_sys::{HtmlElement, HtmlInputElement};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::components::{AnimatedBox, FancyButton, ResultPanel, ResultView};
use crate::dom::{self, MathRandom};

/// Repeating progress timer with the run generation it belongs to.
type Ticker = Rc<RefCell<Option<(u64, Interval)>>>;

/// Cancel the ticker for `generation` once the current callback returns.
fn stop_ticker(ticker: &Ticker, generation: u64) {
    let ticker = ticker.clone();
    Timeout::new(0, move || {
        let finished = {
            let mut slot = ticker.borrow_mut();
            match slot.as_ref() {
                Some((g, _)) if *g == generation => slot.take(),
                _ => None,
            }
        };
        drop(finished);
    })
    .forget();
}

/// Input elements the page reads.
#[derive(Clone)]
struct DomInputs {
    first_number: NodeRef,
    second_number: NodeRef,
    text_input: NodeRef,
}

impl Host for DomInputs {
    fn input_value(&self, role: Role) -> String {
        let node = match role {
            Role::FirstNumber => &self.first_number,
            Role::SecondNumber => &self.second_number,
            Role::TextInput => &self.text_input,
            _ => return String::new(),
        };
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn current_time(&self) -> String {
        dom::current_time()
    }
}

/// Carries out page commands.
#[derive(Clone)]
struct Driver {
    page: Rc<RefCell<Page>>,
    inputs: DomInputs,
    ticker: Ticker,
    redraw: UseForceUpdateHandle,
    scope_view: UseStateHandle<ResultView>,
    calc_view: UseStateHandle<ResultView>,
    text_view: UseStateHandle<ResultView>,
    js_box: NodeRef,
}

impl Driver {
    fn dispatch(&self, action: Action) {
        let commands = self.page.borrow_mut().dispatch(action, &self.inputs);
        self.perform(commands);
    }

    fn perform(&self, commands: Vec<Command>) {
        for command in commands {
            self.perform_one(command);
        }
    }

    fn element(&self, role: Role) -> Option<HtmlElement> {
        match role {
            Role::JsBox => self.js_box.cast::<HtmlElement>(),
            _ => None,
        }
    }

    fn perform_one(&self, command: Command) {
        match command {
            Command::InstallKeyframes => {
                if let Err(e) = dom::install_keyframes() {
                    gloo::console::error!("failed to install keyframes", e);
                }
            }
            Command::Show {
                role,
                rows,
                generation,
            } => {
                let view = ResultView { rows, generation };
                match role {
                    Role::ScopeResult => self.scope_view.set(view),
                    Role::CalcResult => self.calc_view.set(view),
                    Role::TextResult => self.text_view.set(view),
                    other => gloo::console::warn!(format!("{other} is not a result region")),
                }
            }
            Command::Animate { role, replay } => match self.element(role) {
                Some(el) => {
                    if let Err(e) = dom::apply_replay(&el, &replay) {
                        gloo::console::warn!("failed to apply effect", e);
                    }
                }
                None => gloo::console::warn!(format!("{role} not mounted")),
            },
            Command::Unstyle { role, styling } => {
                if let Some(el) = self.element(role)
                    && let Err(e) = dom::undo_styling(&el, styling)
                {
                    gloo::console::warn!("failed to clear effect", e);
                }
            }
            Command::Redraw => self.redraw.force_update(),
            Command::Schedule { timer, delay_ms } => {
                let driver = self.clone();
                Timeout::new(delay_ms, move || {
                    let commands = driver.page.borrow_mut().fire(timer);
                    driver.perform(commands);
                })
                .forget();
            }
            Command::StartTicker {
                generation,
                every_ms,
            } => {
                let driver = self.clone();
                let mut source = MathRandom;
                let interval = Interval::new(every_ms, move || {
                    let commands = driver.page.borrow_mut().tick(generation, &mut source);
                    driver.perform(commands);
                });
                // Replacing the slot drops, and so cancels, any older ticker.
                *self.ticker.borrow_mut() = Some((generation, interval));
            }
            Command::StopTicker { generation } => stop_ticker(&self.ticker, generation),
        }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let page = use_mut_ref(Page::default);
    let redraw = use_force_update();
    let ticker: Ticker = use_mut_ref(|| None);

    let scope_view = use_state(ResultView::default);
    let calc_view = use_state(ResultView::default);
    let text_view = use_state(ResultView::default);

    let first_number = use_node_ref();
    let second_number = use_node_ref();
    let text_input = use_node_ref();
    let js_box = use_node_ref();

    let driver = Driver {
        page: page.clone(),
        inputs: DomInputs {
            first_number: first_number.clone(),
            second_number: second_number.clone(),
            text_input: text_input.clone(),
        },
        ticker,
        redraw,
        scope_view: scope_view.clone(),
        calc_view: calc_view.clone(),
        text_view: text_view.clone(),
        js_box: js_box.clone(),
    };

    // Click handler for `role`, routed through the binding table.
    let on_click = {
        let driver = driver.clone();
        move |role: Role| {
            let driver = driver.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(action) = action_for(EventKind::Click, role) {
                    driver.dispatch(action);
                }
            })
        }
    };

    let on_modal_backdrop = {
        let driver = driver.clone();
        Callback::from(move |e: MouseEvent| {
            // Clicks inside the dialog bubble up with a different target.
            if e.target() == e.current_target()
                && let Some(action) = action_for(EventKind::Click, Role::Modal)
            {
                driver.dispatch(action);
            }
        })
    };

    let modal_state = page.borrow().modal().clone();
    let progress_state = page.borrow().progress().clone();

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "Functions & Animations" }</h1>
                <p class="subtitle">{ "Pure helpers, timers and CSS animation triggers" }</p>
            </header>

            <main class="main">
                <section class="card">
                    <h2>{ "Scope" }</h2>
                    <FancyButton role={Role::ScopeButton} label="Show Scope Demo" onclick={on_click(Role::ScopeButton)} />
                    <ResultPanel role={Role::ScopeResult} view={(*scope_view).clone()} animation={ResultAnimation::FadeInUp} />
                </section>

                <section class="card">
                    <h2>{ "Calculator" }</h2>
                    <div class="inputs">
                        <input id={Role::FirstNumber.id()} type="number" placeholder="First number" ref={first_number} />
                        <input id={Role::SecondNumber.id()} type="number" placeholder="Second number" ref={second_number} />
                    </div>
                    <FancyButton role={Role::CalcButton} label="Calculate" onclick={on_click(Role::CalcButton)} />
                    <ResultPanel role={Role::CalcResult} view={(*calc_view).clone()} animation={ResultAnimation::SlideInLeft} />
                </section>

                <section class="card">
                    <h2>{ "Text" }</h2>
                    <input id={Role::TextInput.id()} type="text" placeholder="Type something..." ref={text_input} />
                    <FancyButton role={Role::TextButton} label="Analyze Text" onclick={on_click(Role::TextButton)} />
                    <ResultPanel role={Role::TextResult} view={(*text_view).clone()} animation={ResultAnimation::BounceIn} />
                </section>

                <section class="card">
                    <h2>{ "Animation Triggers" }</h2>
                    <div id={Role::JsBox.id()} class="js-box" ref={js_box}>{ "JS" }</div>
                    <div class="button-row">
                        <FancyButton role={Role::PopButton} label="Pop" onclick={on_click(Role::PopButton)} />
                        <FancyButton role={Role::ColorButton} label="Color Cycle" onclick={on_click(Role::ColorButton)} />
                        <FancyButton role={Role::ModalButton} label="Open Modal" secondary={true} onclick={on_click(Role::ModalButton)} />
                    </div>
                    <div class="box-row">
                        <AnimatedBox label="Spin" variant={classes!("spin")} />
                        <AnimatedBox label="Bounce" variant={classes!("bounce")} />
                        <AnimatedBox label="Glow" variant={classes!("glow")} />
                    </div>
                </section>

                <section class="card">
                    <h2>{ "Loading" }</h2>
                    <div class="loading-bar">
                        <div
                            class={classes!("loading-fill", progress_state.is_animating().then_some("animate"))}
                            style="width: 0%"
                        />
                    </div>
                    <p id={Role::LoadingText.id()}>{ progress_state.label() }</p>
                    <FancyButton role={Role::LoadingButton} label="Start Loading" onclick={on_click(Role::LoadingButton)} />
                </section>
            </main>

            <div
                id={Role::Modal.id()}
                class={classes!("modal", modal_state.has_show_class().then_some("show"))}
                style={format!("display: {}", modal_state.display())}
                onclick={on_modal_backdrop}
            >
                <div class="modal-dialog">
                    <h3 class="modal-title">{ "Hello from the modal" }</h3>
                    <p>{ "It faded in with a CSS transition. Click outside or close it." }</p>
                    <button id={Role::ModalClose.id()} class="modal-button" onclick={on_click(Role::ModalClose)}>
                        { "Close" }
                    </button>
                </div>
            </div>
        </div>
    }
}
