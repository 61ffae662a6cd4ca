//! Transcript export worker.
//!
//! Serializes snapshots of the composed mockup to JSON files without
//! blocking the UI thread. Exports are stored in the platform data dir
//! under exports/, named <context>-YYYY-MM-DD-HHMMSS.json.

use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use crate::chatlog::ChatLog;

/// One exportable snapshot of the mockup.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSnapshot {
    /// Preset label ("Bot Chat", "Friend Chat", ...).
    pub context: String,
    pub recipient: String,
    pub log: ChatLog,
}

/// Exporter queues snapshots for a background thread so the UI never waits
/// on disk I/O.
pub struct Exporter {
    tx: Sender<ExportSnapshot>,
}

impl Exporter {
    /// Create the exporter and spawn its worker thread.
    pub fn new() -> Result<Self, String> {
        let export_dir = get_export_directory()?;

        fs::create_dir_all(&export_dir)
            .map_err(|e| format!("Failed to create export directory: {}", e))?;

        let (tx, rx) = unbounded::<ExportSnapshot>();

        thread::spawn(move || {
            run_export_thread(rx, export_dir);
        });

        Ok(Self { tx })
    }

    /// Queue a snapshot (non-blocking). If the worker has stopped the
    /// snapshot is silently dropped.
    pub fn export(&self, snapshot: ExportSnapshot) {
        let _ = self.tx.send(snapshot);
    }
}

fn run_export_thread(rx: Receiver<ExportSnapshot>, export_dir: PathBuf) {
    while let Ok(snapshot) = rx.recv() {
        match write_snapshot(&export_dir, &snapshot) {
            Ok(path) => eprintln!("Exported transcript to {}", path.display()),
            Err(e) => eprintln!("Export error: {}", e),
        }
    }
}

/// Write a single snapshot, returning the file it landed in.
fn write_snapshot(export_dir: &Path, snapshot: &ExportSnapshot) -> Result<PathBuf, String> {
    let stamp = Local::now().format("%Y-%m-%d-%H%M%S");
    let file_name = format!("{}-{}.json", sanitize_filename(&snapshot.context), stamp);
    let path = export_dir.join(file_name);

    let data = serde_json::to_string_pretty(snapshot)
        .map_err(|e| format!("Failed to serialize transcript: {}", e))?;
    fs::write(&path, data).map_err(|e| format!("Failed to write export: {}", e))?;

    Ok(path)
}

/// Get the platform-specific export directory using XDG conventions.
fn get_export_directory() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new().ok_or("Failed to determine home directory")?;

    let data_dir = base.data_dir();
    Ok(data_dir.join("chatmock-studio").join("exports"))
}

/// Sanitize a filename to be filesystem-safe.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ' ' => '-',
            _ => c,
        })
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatlog::{Direction, Message};

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Bot Chat"), "bot-chat");
        assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
        assert_eq!(sanitize_filename("Friend Chat"), "friend-chat");
    }

    #[test]
    fn test_export_directory_exists() {
        let result = get_export_directory();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().contains("chatmock-studio"));
    }

    #[test]
    fn test_write_snapshot_produces_json() {
        let dir = std::env::temp_dir().join("chatmock-studio-export-test");
        fs::create_dir_all(&dir).unwrap();

        let snapshot = ExportSnapshot {
            context: "Friend Chat".into(),
            recipient: "Alex Carter".into(),
            log: ChatLog::new().with_message(Message::text(Direction::Inbound, "Hi")),
        };

        let path = write_snapshot(&dir, &snapshot).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Alex Carter"));
        assert!(content.contains("\"Hi\""));

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }
}
