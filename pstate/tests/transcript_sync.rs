use std::sync::Arc;
use std::time::Duration;

use pstate::{ChatMessage, MessageId, MessageStore, Sender};

#[test]
fn streamed_bot_updates_collapse_onto_one_entry() {
    let store = MessageStore::new();
    store.append(ChatMessage::user("u-1", "what's the weather?"));

    for partial in ["It", "It is", "It is sunny."] {
        store.append(ChatMessage::bot("b-1", partial).with_metadata("state", "streaming"));
    }
    store.append(ChatMessage::bot("b-1", "It is sunny.").with_metadata("state", "done"));
    store.append(ChatMessage::user("u-2", "thanks"));

    let messages = store.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].text, "It is sunny.");
    assert_eq!(messages[1].metadata_value("state"), Some("done"));
    assert_eq!(messages[2].id, MessageId::from("u-2"));
}

#[test]
fn server_history_replaces_local_transcript() {
    let store = MessageStore::new();
    store.append(ChatMessage::user("local-1", "draft"));

    let history: Vec<ChatMessage> = serde_json::from_str(
        r#"[
            {"id": 1, "text": "hello", "sender": "user"},
            {"id": "2", "text": "hi!", "sender": "bot", "metadata": {"model": "small"}}
        ]"#,
    )
    .expect("history should decode");
    store.replace_all(history);

    let ids: Vec<_> = store
        .messages()
        .into_iter()
        .map(|message| message.id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn concurrent_writers_share_one_store_handle() {
    let store = Arc::new(MessageStore::new());
    let mut receiver = store.subscribe();

    let writers: Vec<_> = (0..4_u64)
        .map(|writer| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for round in 0..10_u64 {
                    store.append(ChatMessage::bot(writer, format!("round {round}")));
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            })
        })
        .collect();

    for writer in writers {
        writer.await.expect("writer task should finish");
    }

    receiver.changed().await.expect("store should be alive");
    let transcript = receiver.borrow_and_update().clone();
    assert_eq!(transcript.log.len(), 4);
    assert!(
        transcript
            .log
            .messages()
            .iter()
            .all(|message| message.text == "round 9")
    );
}
