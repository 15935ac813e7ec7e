use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Runs the command socket and the config watcher on a dedicated runtime
/// thread, feeding their events into the GTK loop through `tx`. Neither
/// task completes under normal operation.
pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create Tokio runtime");

        rt.block_on(async move {
            tokio::join!(
                server::run_server(tx.clone()),
                config::run_async_watcher(tx),
            );
        });
    });
}
