//! Event loop driving the shell
//!
//! Events come from an [`EventSource`], are translated into shell messages
//! and the shell is redrawn through the injected [`TuiLike`].

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::{
    action::Action,
    infrastructure::{
        config::Config,
        tui::{event_source::EventSource, Event, Frame, TuiLike},
    },
    model::shell::{AppShell, Message},
    presentation::{
        components::shell::{ShellComponent, ShellLayout},
        config::KeyBindings,
        view::ViewTree,
        widgets::nav_bar::NavBarWidget,
    },
};

pub struct App {
    shell: AppShell,
    keybindings: KeyBindings,
    tui: Arc<Mutex<dyn TuiLike>>,
    events: EventSource,
    component: ShellComponent,
    tree: ViewTree,
    layout: ShellLayout,
    should_quit: bool,
}

impl App {
    /// Fails when the configured routes do not form a valid navigation model.
    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike>>, events: EventSource) -> Result<Self> {
        let model = config.navigation_model()?;
        debug!("loaded {} routes", model.len());

        Ok(Self {
            shell: AppShell::new(model),
            keybindings: config.keybindings,
            tui,
            events,
            component: ShellComponent::new(),
            tree: ViewTree::default(),
            layout: ShellLayout::default(),
            should_quit: false,
        })
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn layout(&self) -> ShellLayout {
        self.layout
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        while !self.should_quit {
            self.run_one_cycle().await?;
        }

        self.shutdown().await
    }

    /// Handle a single event. An exhausted event source counts as a quit.
    pub async fn run_one_cycle(&mut self) -> Result<()> {
        match self.events.next().await {
            Some(event) => self.handle_event(event).await,
            None => {
                self.should_quit = true;
                Ok(())
            }
        }
    }

    pub async fn render(&mut self) -> Result<()> {
        self.tree = self.shell.render();

        let mut layout = self.layout;
        let tui = Arc::clone(&self.tui);
        let mut tui = tui.lock().await;
        tui.draw(&mut |frame: &mut Frame<'_>| {
            let area = frame.area();
            layout = self.component.view(&self.shell, &self.tree, frame, area);
        })?;
        self.layout = layout;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.shell.update(Message::Unmount);
        self.tui.lock().await.exit()
    }

    async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Quit | Event::Closed => self.should_quit = true,
            Event::Init | Event::Render => self.render().await?,
            Event::Key(key) => self.handle_key(key).await?,
            Event::Mouse(mouse) => self.handle_mouse(mouse).await?,
            Event::Resize(width, height) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.render().await?;
            }
            Event::Error(e) => error!("terminal event error: {e}"),
            Event::Tick => {}
        }
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(action) = self.keybindings.action_for(&key) else {
            return Ok(());
        };
        debug!("key {:?} -> {action}", key.code);

        match action.message() {
            Some(message) => {
                self.shell.update(message);
                self.render().await
            }
            None => {
                if action == Action::Quit {
                    self.should_quit = true;
                }
                Ok(())
            }
        }
    }

    async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        let hit =
            NavBarWidget::new(&self.tree).hit_test(self.layout.nav_bar, mouse.column, mouse.row);
        if let Some(index) = hit {
            self.shell.update(Message::Select(index));
            self.shell.update(Message::Activate);
            self.render().await?;
        }
        Ok(())
    }
}
