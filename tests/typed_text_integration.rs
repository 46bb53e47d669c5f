//! Integration tests for the typed-text cycler task

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use termfolio::widget::typed_text::TypedTextConfig;
use termfolio::widget::{Cycler, TypedTextPhase, TypedTextSnapshot};

fn test_config() -> TypedTextConfig {
    TypedTextConfig::new(vec!["Hi".to_string()])
        .with_typing_speed(Duration::from_millis(2))
        .with_deleting_speed(Duration::from_millis(2))
        .with_delay_between_texts(Duration::from_millis(5))
        .with_cursor_blink(Duration::from_secs(120))
}

async fn collect_texts(
    rx: &mut mpsc::Receiver<TypedTextSnapshot>,
    count: usize,
) -> Vec<TypedTextSnapshot> {
    let mut snapshots = Vec::new();
    while snapshots.len() < count {
        let snapshot = timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("cycler stalled")
            .expect("snapshot channel closed early");
        snapshots.push(snapshot);
    }
    snapshots
}

#[tokio::test]
async fn test_cycler_replays_the_documented_prefix_sequence() {
    let (tx, mut rx) = mpsc::channel(64);
    let mut cycler = Cycler::spawn(test_config(), tx).unwrap();

    // Mount snapshot plus two full type/pause/delete rounds
    let snapshots = collect_texts(&mut rx, 9).await;
    let texts: Vec<&str> = snapshots.iter().map(|s| s.text.as_str()).collect();

    assert_eq!(
        texts,
        vec!["", "H", "Hi", "Hi", "Hi", "H", "", "H", "Hi"],
        "prefix sequence must be H, Hi, (pause), H, empty, H, Hi"
    );

    // The two unchanged "Hi" snapshots are the pause entering and leaving
    assert_eq!(snapshots[3].phase, TypedTextPhase::Paused);
    assert_eq!(snapshots[4].phase, TypedTextPhase::Deleting);

    cycler.cancel();
}

#[tokio::test]
async fn test_cycler_cancellation_closes_the_stream() {
    let (tx, mut rx) = mpsc::channel(64);
    let mut cycler = Cycler::spawn(test_config(), tx).unwrap();

    collect_texts(&mut rx, 3).await;
    cycler.cancel();

    // Every buffered snapshot drains, then the channel closes for good
    let closed = timeout(Duration::from_secs(5), async {
        while rx.recv().await.is_some() {}
    })
    .await;
    assert!(closed.is_ok(), "cancelled cycler must close its channel");
}

#[tokio::test]
async fn test_dropping_the_handle_tears_the_task_down() {
    let (tx, mut rx) = mpsc::channel(64);
    let cycler = Cycler::spawn(test_config(), tx).unwrap();

    collect_texts(&mut rx, 2).await;
    drop(cycler);

    let closed = timeout(Duration::from_secs(5), async {
        while rx.recv().await.is_some() {}
    })
    .await;
    assert!(closed.is_ok(), "dropped cycler must stop emitting");
}

#[tokio::test]
async fn test_blink_toggles_cursor_without_touching_text() {
    let config = TypedTextConfig::new(vec!["Hello".to_string()])
        // Slow machine, fast blink: snapshots below are blink-driven
        .with_typing_speed(Duration::from_secs(120))
        .with_deleting_speed(Duration::from_secs(120))
        .with_delay_between_texts(Duration::from_secs(120))
        .with_cursor_blink(Duration::from_millis(2));

    let (tx, mut rx) = mpsc::channel(64);
    let mut cycler = Cycler::spawn(config, tx).unwrap();

    let snapshots = collect_texts(&mut rx, 4).await;
    assert!(snapshots.iter().all(|s| s.text.is_empty()));

    let toggles: Vec<bool> = snapshots.iter().map(|s| s.cursor_visible).collect();
    assert_eq!(toggles, vec![true, false, true, false]);

    cycler.cancel();
}
