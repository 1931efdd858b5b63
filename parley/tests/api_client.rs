use std::sync::{Arc, Mutex};

use http::HeaderMap;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use parley::{
    ApiClient, ChatMessage, ClientContext, FetchError, FetchErrorKind, HttpFuture, HttpTransport,
    MessageId, PreparedRequest, RawResponse, ResponseBody, ResponseResolver, Sender, chat_messages,
    get, post_json,
};
use serde_json::{Value, json};

#[derive(Debug)]
struct ReplayTransport {
    status: u16,
    body: Option<Value>,
    seen: Mutex<Vec<PreparedRequest>>,
}

impl ReplayTransport {
    fn json(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: Some(body),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn no_content() -> Arc<Self> {
        Arc::new(Self {
            status: 204,
            body: None,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn authorization(&self) -> Option<String> {
        let seen = self.seen.lock().expect("seen lock");
        let request = seen.last().expect("a request should have been sent");
        request
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}

impl HttpTransport for ReplayTransport {
    fn send<'a>(
        &'a self,
        request: PreparedRequest,
    ) -> HttpFuture<'a, Result<RawResponse, FetchError>> {
        Box::pin(async move {
            self.seen.lock().expect("seen lock").push(request);

            let mut headers = HeaderMap::new();
            let body = match &self.body {
                Some(value) => {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                    ResponseBody::from_bytes(value.to_string())
                }
                None => ResponseBody::empty(),
            };

            Ok(RawResponse::new(self.status, headers, body))
        })
    }
}

fn client_for(transport: Arc<ReplayTransport>, context: ClientContext) -> ApiClient {
    ApiClient::new(ResponseResolver::new(transport), context)
}

#[tokio::test]
async fn stored_token_is_sent_as_bearer_header() {
    let transport = ReplayTransport::json(200, json!({ "ok": true }));
    let context = ClientContext::new();
    context.auth().set_token("token-123");

    let client = client_for(Arc::clone(&transport), context);
    let outcome = client.request::<Value>(get("/me")).await;

    assert_eq!(outcome, Ok(Some(json!({ "ok": true }))));
    assert_eq!(transport.authorization().as_deref(), Some("Bearer token-123"));
}

#[tokio::test]
async fn explicit_authorization_header_is_left_alone() {
    let transport = ReplayTransport::no_content();
    let context = ClientContext::new();
    context.auth().set_token("stored");

    let descriptor = get("/me")
        .with_header("authorization", "Basic abc")
        .expect("header should be valid");
    let client = client_for(Arc::clone(&transport), context);
    let _ = client.request::<Value>(descriptor).await;

    assert_eq!(transport.authorization().as_deref(), Some("Basic abc"));
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization() {
    let transport = ReplayTransport::no_content();
    let client = client_for(Arc::clone(&transport), ClientContext::new());

    assert_eq!(client.request::<Value>(get("/public")).await, Ok(None));
    assert_eq!(transport.authorization(), None);
}

#[tokio::test]
async fn sync_messages_upserts_server_history() {
    let transport = ReplayTransport::json(
        200,
        json!([
            { "id": 1, "text": "hello", "sender": "user" },
            { "id": "2", "text": "hi there", "sender": "bot" }
        ]),
    );
    let context = ClientContext::new();
    context
        .messages()
        .append_all(chat_messages![bot "2" => "typing...", user "3" => "local draft"]);

    let client = client_for(transport, context.clone());
    let applied = client
        .sync_messages(get("/messages"))
        .await
        .expect("sync should succeed");

    assert_eq!(applied, 2);
    let texts: Vec<_> = context
        .messages()
        .messages()
        .into_iter()
        .map(|message| message.text)
        .collect();
    assert_eq!(texts, vec!["hi there", "local draft", "hello"]);
}

#[tokio::test]
async fn empty_sync_payload_leaves_store_unchanged() {
    let transport = ReplayTransport::no_content();
    let context = ClientContext::new();
    context.messages().append(ChatMessage::user("1", "kept"));

    let client = client_for(transport, context.clone());
    let applied = client
        .sync_messages(get("/messages"))
        .await
        .expect("no content is not a failure");

    assert_eq!(applied, 0);
    assert_eq!(context.messages().len(), 1);
}

#[tokio::test]
async fn failed_sync_surfaces_http_error_and_keeps_store() {
    let transport = ReplayTransport::json(403, json!({ "message": "forbidden" }));
    let context = ClientContext::new();
    context.messages().append(ChatMessage::user("1", "kept"));

    let client = client_for(transport, context.clone());
    let err = client
        .sync_messages(get("/messages"))
        .await
        .expect_err("403 must fail");

    assert_eq!(err.kind, FetchErrorKind::Http);
    assert_eq!(err.message, "forbidden");
    assert_eq!(context.messages().len(), 1);
}

#[tokio::test]
async fn send_message_records_prompt_and_reply() {
    let transport = ReplayTransport::json(
        200,
        json!({ "id": "r-1", "text": "Your order shipped.", "sender": "bot" }),
    );
    let context = ClientContext::new();
    let client = client_for(transport, context.clone());

    let prompt = ChatMessage::user("q-1", "Where is my order?");
    let descriptor = post_json("/messages", &prompt).expect("prompt should encode");
    let reply = client
        .send_message(prompt, descriptor)
        .await
        .expect("send should succeed")
        .expect("server returned a reply");

    assert_eq!(reply.sender, Sender::Bot);
    assert_eq!(context.messages().len(), 2);
    assert_eq!(
        context.messages().get(&MessageId::from("r-1")).map(|m| m.text),
        Some("Your order shipped.".to_string())
    );
}
