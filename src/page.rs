//! Page-level action dispatch.
//!
//! [`Page`] owns the state every page handler touches and turns an
//! [`Action`] or an elapsed [`Timer`] into [`Command`]s for the host to
//! carry out. The web UI performs them against the DOM and browser
//! timers; the integration tests perform them on a virtual clock.
//!
//! Press and pulse effects are not handled here. Every animated box and
//! button owns its own [`Animator`](crate::Animator) and plays
//! [`Action::effect`] directly.

use crate::animation::{Animator, Effect, Phase, Replay, Styling};
use crate::arith::parse_number_or_zero;
use crate::bindings::{Action, Role};
use crate::config::Timings;
use crate::modal::{Modal, ModalTimer};
use crate::progress::{IncrementSource, Progress, ProgressPhase, Tick};
use crate::report::{CalcReport, Report, Row, TextReport};
use crate::state::UiState;

/// What the page reads from its surroundings.
pub trait Host {
    /// Current text of an input element. Missing inputs read as empty.
    fn input_value(&self, role: Role) -> String;

    fn current_time(&self) -> String;
}

/// One-shot timers the page asks the host for, each tagged with the
/// generation it was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    BoxExpire(u64),
    ModalSettle(u64),
    ProgressBegin(u64),
    ProgressReset(u64),
}

/// Work for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    InstallKeyframes,
    /// Replace a result region's rows and replay its entrance animation.
    /// `generation` differs on every write.
    Show {
        role: Role,
        rows: Vec<Row>,
        generation: u64,
    },
    /// Strip the replay's classes, flush layout, apply its styling.
    Animate { role: Role, replay: Replay },
    Unstyle { role: Role, styling: Styling },
    /// Modal or progress state changed.
    Redraw,
    /// Call [`Page::fire`] with `timer` after `delay_ms`.
    Schedule { timer: Timer, delay_ms: u32 },
    /// Call [`Page::tick`] with `generation` every `every_ms` until told
    /// to stop.
    StartTicker { generation: u64, every_ms: u32 },
    StopTicker { generation: u64 },
}

fn redraw_if(changed: bool) -> Vec<Command> {
    if changed {
        vec![Command::Redraw]
    } else {
        Vec::new()
    }
}

#[derive(Debug)]
pub struct Page {
    timings: Timings,
    ui: UiState,
    js_box: Animator,
    modal: Modal,
    progress: Progress,
    writes: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl Page {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            ui: UiState::new(),
            js_box: Animator::new(),
            modal: Modal::new(),
            progress: Progress::new(),
            writes: 0,
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn js_box(&self) -> &Animator {
        &self.js_box
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Run the handler for `action`.
    pub fn dispatch(&mut self, action: Action, host: &impl Host) -> Vec<Command> {
        tracing::debug!(%action, "dispatch");
        match action {
            Action::InstallKeyframes => vec![Command::InstallKeyframes],
            Action::ShowScopeDemo => {
                let report = self.ui.show_scope_demo(host.current_time());
                vec![self.show(Role::ScopeResult, &report)]
            }
            Action::CalculateAndDisplay => {
                let a = parse_number_or_zero(&host.input_value(Role::FirstNumber));
                let b = parse_number_or_zero(&host.input_value(Role::SecondNumber));
                vec![self.show(Role::CalcResult, &CalcReport::new(a, b))]
            }
            Action::ManipulateText => {
                let report = TextReport::new(&host.input_value(Role::TextInput));
                vec![self.show(Role::TextResult, &report)]
            }
            Action::TriggerBoxAnimation => self.animate_box(Effect::Pop),
            Action::TriggerColorCycle => self.animate_box(Effect::ColorCycle),
            Action::ToggleModal => {
                let timer = self.modal.toggle(&self.timings);
                Self::modal_changed(timer)
            }
            Action::DismissModal => match self.modal.dismiss(&self.timings) {
                Some(timer) => Self::modal_changed(timer),
                None => Vec::new(),
            },
            Action::StartLoading => {
                let mut commands = Vec::new();
                if self.progress.phase() == ProgressPhase::Running {
                    commands.push(Command::StopTicker {
                        generation: self.progress.generation(),
                    });
                }
                let timer = self.progress.start(&self.timings);
                commands.push(Command::Redraw);
                commands.push(Command::Schedule {
                    timer: Timer::ProgressBegin(timer.generation),
                    delay_ms: timer.delay_ms,
                });
                commands
            }
            Action::PressBox | Action::PulseButton => {
                tracing::debug!(%action, "element-local action, nothing to do");
                Vec::new()
            }
        }
    }

    /// A timer requested through [`Command::Schedule`] elapsed.
    pub fn fire(&mut self, timer: Timer) -> Vec<Command> {
        match timer {
            Timer::BoxExpire(generation) => {
                let Phase::Animating { effect, .. } = self.js_box.phase() else {
                    return Vec::new();
                };
                if self.js_box.expire(generation) {
                    vec![Command::Unstyle {
                        role: Role::JsBox,
                        styling: effect.styling(),
                    }]
                } else {
                    Vec::new()
                }
            }
            Timer::ModalSettle(generation) => redraw_if(self.modal.settle(generation)),
            Timer::ProgressBegin(generation) => {
                match self.progress.begin(generation, &self.timings) {
                    Some(repeat) => vec![
                        Command::Redraw,
                        Command::StartTicker {
                            generation: repeat.generation,
                            every_ms: repeat.delay_ms,
                        },
                    ],
                    None => Vec::new(),
                }
            }
            Timer::ProgressReset(generation) => redraw_if(self.progress.reset(generation)),
        }
    }

    /// One firing of the ticker started with `generation`.
    pub fn tick(&mut self, generation: u64, source: &mut impl IncrementSource) -> Vec<Command> {
        match self.progress.tick(generation, source, &self.timings) {
            Tick::Advanced(_) => vec![Command::Redraw],
            Tick::Completed(reset) => vec![
                Command::Redraw,
                Command::StopTicker { generation },
                Command::Schedule {
                    timer: Timer::ProgressReset(reset.generation),
                    delay_ms: reset.delay_ms,
                },
            ],
            Tick::Stale => vec![Command::StopTicker { generation }],
        }
    }

    fn show(&mut self, role: Role, report: &impl Report) -> Command {
        self.writes += 1;
        Command::Show {
            role,
            rows: report.rows(),
            generation: self.writes,
        }
    }

    fn animate_box(&mut self, effect: Effect) -> Vec<Command> {
        let replay = self.js_box.trigger(effect, &self.timings);
        let expiry = Command::Schedule {
            timer: Timer::BoxExpire(replay.generation),
            delay_ms: replay.duration_ms,
        };
        vec![
            Command::Animate {
                role: Role::JsBox,
                replay,
            },
            expiry,
        ]
    }

    fn modal_changed(timer: ModalTimer) -> Vec<Command> {
        vec![
            Command::Redraw,
            Command::Schedule {
                timer: Timer::ModalSettle(timer.generation),
                delay_ms: timer.delay_ms,
            },
        ]
    }
}
