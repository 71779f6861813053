// Error log file: only ERROR records reach it

use servertrack::logging::error_file_layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

#[test]
fn error_file_receives_only_error_records() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("logs").join("error.log");

    let (layer, guard) = error_file_layer::<Registry>(&path).unwrap();
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("request handled");
        tracing::warn!("slow request");
        tracing::error!(server_name = "server1", "report failed");
    });
    // Dropping the guard flushes the background writer.
    drop(guard);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("report failed"));
    assert!(contents.contains("server_name=\"server1\""));
    assert!(!contents.contains("request handled"));
    assert!(!contents.contains("slow request"));
    assert!(!contents.contains('\u{1b}'), "no ANSI escapes in the file");
}

#[test]
fn error_file_path_must_name_a_file() {
    assert!(error_file_layer::<Registry>(std::path::Path::new("..")).is_err());
}
