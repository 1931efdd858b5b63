//! Authenticated requests and transcript syncing on top of the resolver.

use http::header::AUTHORIZATION;
use phttp::{FetchError, Outcome, RequestDescriptor, ResponseResolver};
use pstate::ChatMessage;
use serde::de::DeserializeOwned;

use crate::ClientContext;

#[derive(Debug, Clone)]
pub struct ApiClient {
    resolver: ResponseResolver,
    context: ClientContext,
}

impl ApiClient {
    pub fn new(resolver: ResponseResolver, context: ClientContext) -> Self {
        Self { resolver, context }
    }

    pub fn resolver(&self) -> &ResponseResolver {
        &self.resolver
    }

    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    /// Adds `Authorization: Bearer <token>` from the auth store unless the
    /// descriptor already carries an `Authorization` header.
    pub fn authorize(&self, descriptor: RequestDescriptor) -> Result<RequestDescriptor, FetchError> {
        if descriptor.has_header(AUTHORIZATION.as_str()) {
            return Ok(descriptor);
        }

        match self.context.auth.get() {
            Some(token) if !token.is_empty() => descriptor.with_bearer_token(token.expose()),
            _ => Ok(descriptor),
        }
    }

    pub async fn request<T>(&self, descriptor: RequestDescriptor) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        let descriptor = self.authorize(descriptor)?;
        self.resolver.resolve(descriptor).await
    }

    /// Resolves a list of messages and upserts each into the message store.
    /// Returns how many messages were applied; an empty payload applies none.
    pub async fn sync_messages(&self, descriptor: RequestDescriptor) -> Result<usize, FetchError> {
        let Some(messages) = self.request::<Vec<ChatMessage>>(descriptor).await? else {
            return Ok(0);
        };

        let applied = messages.len();
        self.context.messages.append_all(messages);
        Ok(applied)
    }

    /// Appends `message` locally, sends the request, and upserts the reply
    /// when the server returns one.
    pub async fn send_message(
        &self,
        message: ChatMessage,
        descriptor: RequestDescriptor,
    ) -> Outcome<ChatMessage> {
        self.context.messages.append(message);

        let reply = self.request::<ChatMessage>(descriptor).await?;
        if let Some(reply) = &reply {
            self.context.messages.append(reply.clone());
        }

        Ok(reply)
    }
}
