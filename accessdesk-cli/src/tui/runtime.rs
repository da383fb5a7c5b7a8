//! The portal runtime: terminal lifecycle, event loop, message routing.
//!
//! One loop drives everything: draw the active screen, drain async results
//! from the message channel, then poll crossterm for input. Async work
//! requested by an app (`Command::Perform`) is spawned on tokio and its
//! output comes back through the channel as a portal message.

use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Config;
use crate::tui::apps::{access_request, group_create, home, profile, roles, stores};
use crate::tui::command::{Command, Screen};
use crate::tui::session::Session;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Messages routed by the runtime, one variant per screen.
pub enum PortalMsg {
    Home(home::Msg),
    AccessRequest(access_request::Msg),
    GroupCreate(group_create::Msg),
    Stores(stores::Msg),
    Roles(roles::Msg),
    Profile(profile::Msg),
}

pub struct Runtime {
    session: Session,
    screen: Screen,
    running: bool,
    msg_tx: tokio::sync::mpsc::UnboundedSender<PortalMsg>,
    msg_rx: tokio::sync::mpsc::UnboundedReceiver<PortalMsg>,

    home: home::State,
    access_request: access_request::State,
    group_create: group_create::State,
    stores: stores::State,
    roles: roles::State,
    profile: profile::State,
}

impl Runtime {
    pub fn new(config: &Config) -> Result<Self> {
        let session = Session::from_config(config)?;
        let screen = Screen::from_name(&config.default_screen).unwrap_or(Screen::Home);
        Ok(Self::with_session(session, screen))
    }

    fn with_session(session: Session, screen: Screen) -> Self {
        let (msg_tx, msg_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut runtime = Self {
            session,
            screen: Screen::Home,
            running: true,
            msg_tx,
            msg_rx,
            home: home::State::new(),
            access_request: access_request::State::new(),
            group_create: group_create::State::new(),
            stores: stores::State::new(),
            roles: roles::State::new(),
            profile: profile::State::new(),
        };
        runtime.navigate(screen);
        runtime
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        crossterm::execute!(stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode().ok();
        crossterm::execute!(stdout(), LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();
        result
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while self.running {
            terminal.draw(|frame| self.view(frame))?;

            while let Ok(msg) = self.msg_rx.try_recv() {
                self.dispatch(msg);
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Home => home::view(frame, area, &self.home, &self.session),
            Screen::AccessRequest => {
                access_request::view(frame, area, &self.access_request, &self.session);
            }
            Screen::GroupCreate => {
                group_create::view(frame, area, &self.group_create, &self.session);
            }
            Screen::Stores => stores::view(frame, area, &self.stores, &self.session),
            Screen::Roles => roles::view(frame, area, &self.roles, &self.session),
            Screen::Profile => profile::view(frame, area, &self.profile, &self.session),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        // The active screen gets the key first; globals apply only to
        // keys it does not consume.
        let msg = match self.screen {
            Screen::Home => home::handle_key(&self.home, key).map(PortalMsg::Home),
            Screen::AccessRequest => {
                access_request::handle_key(&self.access_request, key).map(PortalMsg::AccessRequest)
            }
            Screen::GroupCreate => {
                group_create::handle_key(&self.group_create, key).map(PortalMsg::GroupCreate)
            }
            Screen::Stores => stores::handle_key(&self.stores, key).map(PortalMsg::Stores),
            Screen::Roles => roles::handle_key(&self.roles, key).map(PortalMsg::Roles),
            Screen::Profile => profile::handle_key(&self.profile, key).map(PortalMsg::Profile),
        };

        match msg {
            Some(msg) => self.dispatch(msg),
            None => match key.code {
                KeyCode::Esc => {
                    if self.screen == Screen::Home {
                        self.running = false;
                    } else {
                        self.navigate(Screen::Home);
                    }
                }
                KeyCode::Char('q') => self.running = false,
                _ => {}
            },
        }
    }

    fn dispatch(&mut self, msg: PortalMsg) {
        // A fresh message invalidates the previous status line.
        self.session.status = None;
        let command = match msg {
            PortalMsg::Home(msg) => {
                home::update(&mut self.home, &mut self.session, msg).map(PortalMsg::Home)
            }
            PortalMsg::AccessRequest(msg) => {
                access_request::update(&mut self.access_request, &mut self.session, msg)
                    .map(PortalMsg::AccessRequest)
            }
            PortalMsg::GroupCreate(msg) => {
                group_create::update(&mut self.group_create, &mut self.session, msg)
                    .map(PortalMsg::GroupCreate)
            }
            PortalMsg::Stores(msg) => {
                stores::update(&mut self.stores, &mut self.session, msg).map(PortalMsg::Stores)
            }
            PortalMsg::Roles(msg) => {
                roles::update(&mut self.roles, &mut self.session, msg).map(PortalMsg::Roles)
            }
            PortalMsg::Profile(msg) => {
                profile::update(&mut self.profile, &mut self.session, msg).map(PortalMsg::Profile)
            }
        };
        self.apply(command);
    }

    fn apply(&mut self, command: Command<PortalMsg>) {
        match command {
            Command::None => {}
            Command::Quit => self.running = false,
            Command::Navigate(screen) => self.navigate(screen),
            Command::Perform(future) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let _ = tx.send(future.await);
                });
            }
        }
    }

    fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        if screen == Screen::Profile {
            self.profile.refresh(&self.session);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProfileRecord;
    use crate::services::Handoff;
    use crate::services::handoff::SHARED_PROFILE_KEY;

    fn runtime() -> (Runtime, tempfile::TempDir) {
        let mut session = Session::for_tests();
        let dir = tempfile::tempdir().unwrap();
        session.handoff = Handoff::new(dir.path().to_path_buf());
        (Runtime::with_session(session, Screen::Home), dir)
    }

    fn press(runtime: &mut Runtime, code: KeyCode) {
        runtime.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_home_menu_opens_screens() {
        let (mut runtime, _guard) = runtime();
        press(&mut runtime, KeyCode::Enter);
        assert_eq!(runtime.screen, Screen::AccessRequest);
    }

    #[tokio::test]
    async fn test_esc_returns_home_then_quits() {
        let (mut runtime, _guard) = runtime();
        runtime.navigate(Screen::Stores);
        press(&mut runtime, KeyCode::Esc);
        assert_eq!(runtime.screen, Screen::Home);
        assert!(runtime.running);
        press(&mut runtime, KeyCode::Esc);
        assert!(!runtime.running);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_anywhere() {
        let (mut runtime, _guard) = runtime();
        runtime.navigate(Screen::AccessRequest);
        runtime.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!runtime.running);
    }

    #[tokio::test]
    async fn test_navigating_to_profile_refreshes_the_record() {
        let (mut runtime, _guard) = runtime();
        let record = ProfileRecord::from_user(&runtime.session.catalog.users[0]);
        runtime
            .session
            .handoff
            .put(SHARED_PROFILE_KEY, &record)
            .unwrap();
        runtime.navigate(Screen::Profile);
        assert_eq!(runtime.profile.record.display_name, "John Smith");
    }

    #[tokio::test]
    async fn test_performed_futures_come_back_through_the_channel() {
        let (mut runtime, _guard) = runtime();
        runtime.apply(Command::perform(async {
            PortalMsg::Home(home::Msg::Open)
        }));
        let msg = runtime.msg_rx.recv().await.expect("spawned message");
        runtime.dispatch(msg);
        assert_eq!(runtime.screen, Screen::AccessRequest);
    }
}
