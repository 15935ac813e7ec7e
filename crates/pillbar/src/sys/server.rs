use crate::events::AppEvent;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub const SOCKET_PATH: &str = "/tmp/pillbar.sock";

/// Parses one line of the control protocol.
///
/// `select N` jumps to an item, `value X` drives the continuous position
/// (fractional values scrub the indicator mid-transition), `items a|b|c`
/// replaces the labels.
fn parse_line(line: &str) -> Option<AppEvent> {
    let (command, rest) = match line.trim().split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line.trim(), ""),
    };
    match command {
        "select" => rest.parse().ok().map(AppEvent::Select),
        "value" => rest.parse().ok().map(AppEvent::SetValue),
        "items" => {
            let items: Vec<String> = rest
                .split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            (!items.is_empty()).then_some(AppEvent::SetItems(items))
        }
        "reload" => Some(AppEvent::ConfigReload),
        _ => None,
    }
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_line(&line) {
                            Some(event) => {
                                let _ = tx.send(event).await;
                            }
                            None => log::warn!("Ignoring unknown command: {:?}", line),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
