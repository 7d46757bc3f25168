use tracing::{debug, info};

use crate::{
    model::navigation::NavigationModel,
    presentation::view::{ViewNode, ViewTree},
};

/// Projects a navigation model into a view tree, one node per route in model order.
pub fn render(model: &NavigationModel) -> ViewTree {
    ViewTree::new(
        model
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| ViewNode::new(index, entry.label(), entry.target()))
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShellState {
    #[default]
    Unmounted,
    Mounted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectNext,
    SelectPrevious,
    Select(usize),
    Activate,
    Unmount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppShell {
    model: NavigationModel,
    state: ShellState,
    selected: Option<usize>,
    active: Option<usize>,
}

impl AppShell {
    pub fn new(model: NavigationModel) -> Self {
        let first = (!model.is_empty()).then_some(0);
        Self {
            model,
            state: ShellState::Unmounted,
            selected: first,
            active: first,
        }
    }

    pub fn model(&self) -> &NavigationModel {
        &self.model
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state == ShellState::Mounted
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.model.get(index))
            .map(|entry| entry.label())
    }

    pub fn active_target(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.model.get(index))
            .map(|entry| entry.target())
    }

    pub fn render(&mut self) -> ViewTree {
        if self.state == ShellState::Unmounted {
            debug!("mounting shell with {} routes", self.model.len());
            self.state = ShellState::Mounted;
        }
        render(&self.model)
    }

    pub fn unmount(&mut self) {
        if self.state == ShellState::Mounted {
            debug!("unmounting shell");
        }
        self.state = ShellState::Unmounted;
    }

    pub fn update(&mut self, message: Message) {
        let len = self.model.len();
        match message {
            Message::SelectNext => {
                self.selected = self.selected.map(|index| (index + 1) % len);
            }
            Message::SelectPrevious => {
                self.selected = self.selected.map(|index| (index + len - 1) % len);
            }
            Message::Select(index) => {
                if index < len {
                    self.selected = Some(index);
                }
            }
            Message::Activate => self.activate(),
            Message::Unmount => self.unmount(),
        }
    }

    fn activate(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        if let Some(entry) = self.model.get(index) {
            info!("navigate to {} ({})", entry.target(), entry.label());
            self.active = Some(index);
        }
    }
}
