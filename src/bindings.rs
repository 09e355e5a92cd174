//! Event-binding table.
//!
//! The page registers its handlers once at startup by walking
//! [`BINDINGS`]. Each entry maps an event on an element role to the
//! action it triggers.

use std::fmt;
use std::str::FromStr;

use crate::animation::Effect;
use crate::error::PlaygroundError;

/// Elements the page reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Document,
    FirstNumber,
    SecondNumber,
    TextInput,
    ScopeResult,
    CalcResult,
    TextResult,
    ScopeButton,
    CalcButton,
    TextButton,
    PopButton,
    ColorButton,
    ModalButton,
    ModalClose,
    Modal,
    JsBox,
    AnimatedBox,
    SecondaryButton,
    LoadingButton,
    LoadingFill,
    LoadingText,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::Document,
        Role::FirstNumber,
        Role::SecondNumber,
        Role::TextInput,
        Role::ScopeResult,
        Role::CalcResult,
        Role::TextResult,
        Role::ScopeButton,
        Role::CalcButton,
        Role::TextButton,
        Role::PopButton,
        Role::ColorButton,
        Role::ModalButton,
        Role::ModalClose,
        Role::Modal,
        Role::JsBox,
        Role::AnimatedBox,
        Role::SecondaryButton,
        Role::LoadingButton,
        Role::LoadingFill,
        Role::LoadingText,
    ];

    /// CSS selector locating the element(s) in the page.
    pub fn selector(self) -> &'static str {
        match self {
            Role::Document => ":root",
            Role::FirstNumber => "#num1",
            Role::SecondNumber => "#num2",
            Role::TextInput => "#text-input",
            Role::ScopeResult => "#scope-result",
            Role::CalcResult => "#calc-result",
            Role::TextResult => "#text-result",
            Role::ScopeButton => "#scope-btn",
            Role::CalcButton => "#calc-btn",
            Role::TextButton => "#text-btn",
            Role::PopButton => "#pop-btn",
            Role::ColorButton => "#color-btn",
            Role::ModalButton => "#modal-btn",
            Role::ModalClose => "#modal-close",
            Role::Modal => "#modal",
            Role::JsBox => "#js-animated-box",
            Role::AnimatedBox => ".animated-box",
            Role::SecondaryButton => ".fancy-btn.secondary",
            Role::LoadingButton => "#loading-btn",
            Role::LoadingFill => ".loading-fill",
            Role::LoadingText => "#loading-text",
        }
    }

    /// Element id, for roles that name a single element by id.
    pub fn id(self) -> Option<&'static str> {
        self.selector().strip_prefix('#')
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Document => "document",
            Role::FirstNumber => "first-number",
            Role::SecondNumber => "second-number",
            Role::TextInput => "text-input",
            Role::ScopeResult => "scope-result",
            Role::CalcResult => "calc-result",
            Role::TextResult => "text-result",
            Role::ScopeButton => "scope-button",
            Role::CalcButton => "calc-button",
            Role::TextButton => "text-button",
            Role::PopButton => "pop-button",
            Role::ColorButton => "color-button",
            Role::ModalButton => "modal-button",
            Role::ModalClose => "modal-close",
            Role::Modal => "modal",
            Role::JsBox => "js-box",
            Role::AnimatedBox => "animated-box",
            Role::SecondaryButton => "secondary-button",
            Role::LoadingButton => "loading-button",
            Role::LoadingFill => "loading-fill",
            Role::LoadingText => "loading-text",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| PlaygroundError::UnknownRole(s.to_string()))
    }
}

/// DOM events the page listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The document finished loading.
    Ready,
    Click,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Ready => "ready",
            EventKind::Click => "click",
        })
    }
}

/// Handlers the page can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    InstallKeyframes,
    ShowScopeDemo,
    CalculateAndDisplay,
    ManipulateText,
    TriggerBoxAnimation,
    TriggerColorCycle,
    ToggleModal,
    /// Close the modal when its backdrop (not its content) is clicked.
    DismissModal,
    StartLoading,
    PressBox,
    PulseButton,
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::InstallKeyframes,
        Action::ShowScopeDemo,
        Action::CalculateAndDisplay,
        Action::ManipulateText,
        Action::TriggerBoxAnimation,
        Action::TriggerColorCycle,
        Action::ToggleModal,
        Action::DismissModal,
        Action::StartLoading,
        Action::PressBox,
        Action::PulseButton,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::InstallKeyframes => "install-keyframes",
            Action::ShowScopeDemo => "show-scope-demo",
            Action::CalculateAndDisplay => "calculate-and-display",
            Action::ManipulateText => "manipulate-text",
            Action::TriggerBoxAnimation => "trigger-box-animation",
            Action::TriggerColorCycle => "trigger-color-cycle",
            Action::ToggleModal => "toggle-modal",
            Action::DismissModal => "dismiss-modal",
            Action::StartLoading => "start-loading",
            Action::PressBox => "press-box",
            Action::PulseButton => "pulse-button",
        }
    }

    /// Timed effect played on the element, for actions that animate one.
    pub fn effect(self) -> Option<Effect> {
        match self {
            Action::TriggerBoxAnimation => Some(Effect::Pop),
            Action::TriggerColorCycle => Some(Effect::ColorCycle),
            Action::PressBox => Some(Effect::Press),
            Action::PulseButton => Some(Effect::Pulse),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| PlaygroundError::UnknownAction(s.to_string()))
    }
}

/// One row of the binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub event: EventKind,
    pub role: Role,
    pub action: Action,
}

const fn bind(event: EventKind, role: Role, action: Action) -> Binding {
    Binding {
        event,
        role,
        action,
    }
}

/// Every handler the page installs.
pub const BINDINGS: &[Binding] = &[
    bind(EventKind::Ready, Role::Document, Action::InstallKeyframes),
    bind(EventKind::Click, Role::ScopeButton, Action::ShowScopeDemo),
    bind(EventKind::Click, Role::CalcButton, Action::CalculateAndDisplay),
    bind(EventKind::Click, Role::TextButton, Action::ManipulateText),
    bind(EventKind::Click, Role::PopButton, Action::TriggerBoxAnimation),
    bind(EventKind::Click, Role::ColorButton, Action::TriggerColorCycle),
    bind(EventKind::Click, Role::ModalButton, Action::ToggleModal),
    bind(EventKind::Click, Role::ModalClose, Action::ToggleModal),
    bind(EventKind::Click, Role::Modal, Action::DismissModal),
    bind(EventKind::Click, Role::LoadingButton, Action::StartLoading),
    bind(EventKind::Click, Role::AnimatedBox, Action::PressBox),
    bind(EventKind::Click, Role::SecondaryButton, Action::PulseButton),
];

/// Action bound to `event` on `role`, if any.
pub fn action_for(event: EventKind, role: Role) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|b| b.event == event && b.role == role)
        .map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup() {
        assert_eq!(
            action_for(EventKind::Click, Role::CalcButton),
            Some(Action::CalculateAndDisplay)
        );
        assert_eq!(
            action_for(EventKind::Ready, Role::Document),
            Some(Action::InstallKeyframes)
        );
        assert_eq!(action_for(EventKind::Click, Role::FirstNumber), None);
        assert_eq!(action_for(EventKind::Ready, Role::CalcButton), None);
    }

    #[test]
    fn test_modal_toggled_from_two_buttons() {
        let roles: Vec<Role> = BINDINGS
            .iter()
            .filter(|b| b.action == Action::ToggleModal)
            .map(|b| b.role)
            .collect();
        assert_eq!(roles, vec![Role::ModalButton, Role::ModalClose]);
    }

    #[test]
    fn test_each_event_role_pair_bound_once() {
        let mut seen = HashSet::new();
        for b in BINDINGS {
            assert!(seen.insert((b.event, b.role)), "duplicate binding {b:?}");
        }
    }

    #[test]
    fn test_every_action_is_bound() {
        for action in Action::ALL {
            assert!(
                BINDINGS.iter().any(|b| b.action == *action),
                "{action} has no binding"
            );
        }
    }

    #[test]
    fn test_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.name().parse::<Role>().unwrap(), *role);
        }
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), *action);
        }
        assert_eq!(
            "nope".parse::<Role>(),
            Err(PlaygroundError::UnknownRole("nope".to_string()))
        );
    }

    #[test]
    fn test_effects() {
        assert_eq!(Action::TriggerBoxAnimation.effect(), Some(Effect::Pop));
        assert_eq!(Action::TriggerColorCycle.effect(), Some(Effect::ColorCycle));
        assert_eq!(
            action_for(EventKind::Click, Role::AnimatedBox).and_then(Action::effect),
            Some(Effect::Press)
        );
        assert_eq!(
            action_for(EventKind::Click, Role::SecondaryButton).and_then(Action::effect),
            Some(Effect::Pulse)
        );
        assert_eq!(Action::ToggleModal.effect(), None);
    }

    #[test]
    fn test_ids() {
        assert_eq!(Role::FirstNumber.id(), Some("num1"));
        assert_eq!(Role::JsBox.id(), Some("js-animated-box"));
        assert_eq!(Role::AnimatedBox.id(), None);
    }
}
