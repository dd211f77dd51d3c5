use std::{
    cell::{Cell, RefCell},
    net::TcpListener,
    time::Duration,
};

use wait_dev_server::{
    config::derive_dev_server_port, CancelToken, ConnectionTarget, LaunchCommand, Launcher,
    PollOutcome, PollerConfig, ReadinessPoller, Sleeper, TcpConnector, TickOutcome,
};

#[derive(Default)]
struct RecordingLauncher {
    urls: Vec<String>,
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, start_url: &str) -> Result<(), String> {
        self.urls.push(start_url.to_string());
        Ok(())
    }
}

/// Brings the dev server up on the port after a fixed number of back-offs.
struct ListenerAppearsSleeper {
    port: u16,
    appear_after: usize,
    sleeps: RefCell<Vec<Duration>>,
    listener: RefCell<Option<TcpListener>>,
    bind_failed: Cell<bool>,
}

impl Sleeper for ListenerAppearsSleeper {
    fn sleep(&self, duration: Duration) {
        let mut sleeps = self.sleeps.borrow_mut();
        sleeps.push(duration);
        if sleeps.len() == self.appear_after {
            match TcpListener::bind(("127.0.0.1", self.port)) {
                Ok(listener) => *self.listener.borrow_mut() = Some(listener),
                Err(_) => self.bind_failed.set(true),
            }
        }
    }
}

fn unused_local_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

fn config_for(port: u16) -> PollerConfig {
    let target = ConnectionTarget {
        host: "127.0.0.1".to_string(),
        port,
    };
    PollerConfig {
        start_url: target.start_url().expect("valid start url"),
        target,
        launch_command: LaunchCommand::parse("true").expect("valid command"),
        retry_delay: Duration::from_secs(1),
        connect_timeout: Duration::from_millis(300),
    }
}

#[test]
fn base_port_3000_targets_dev_server_on_2999() {
    let config = PollerConfig::from_lookup(|key| (key == "PORT").then(|| "3000".to_string()))
        .expect("config should resolve");
    assert_eq!(config.target.port, 2999);
    assert_eq!(config.start_url, "http://localhost:2999");

    assert_eq!(derive_dev_server_port(None), 3000);
}

#[test]
fn launches_once_after_listener_appears() {
    let port = unused_local_port();
    let sleeper = ListenerAppearsSleeper {
        port,
        appear_after: 3,
        sleeps: RefCell::new(Vec::new()),
        listener: RefCell::new(None),
        bind_failed: Cell::new(false),
    };
    let mut poller = ReadinessPoller::new(
        config_for(port),
        TcpConnector::new(Duration::from_millis(300)),
        RecordingLauncher::default(),
    );

    let outcome = poller.run(&sleeper, &CancelToken::new());
    assert!(!sleeper.bind_failed.get(), "port {port} was taken concurrently");

    assert_eq!(
        outcome,
        PollOutcome::Ready {
            attempts: 4,
            tick: TickOutcome::Launched
        }
    );
    assert_eq!(*sleeper.sleeps.borrow(), vec![Duration::from_secs(1); 3]);
    assert_eq!(
        poller.launcher().urls,
        vec![format!("http://127.0.0.1:{port}")]
    );

    // Listener is still up: later ticks connect but never relaunch.
    assert_eq!(poller.tick(), TickOutcome::AlreadyLaunched);
    assert_eq!(poller.tick(), TickOutcome::AlreadyLaunched);
    assert_eq!(poller.launcher().urls.len(), 1);
}
