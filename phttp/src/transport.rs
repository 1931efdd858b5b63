//! HTTP transport trait and reqwest-based implementation.

use pcommon::BoxFuture;

use crate::{FetchError, PreparedRequest, RawResponse};

pub type HttpFuture<'a, T> = BoxFuture<'a, T>;

pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    fn send<'a>(
        &'a self,
        request: PreparedRequest,
    ) -> HttpFuture<'a, Result<RawResponse, FetchError>>;
}

#[cfg(feature = "reqwest-transport")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest-transport")]
mod reqwest_transport {
    use http::header::CONTENT_TYPE;
    use reqwest::multipart::{Form, Part};
    use reqwest::{Client, RequestBuilder, Response, Url};

    use crate::{
        BodySource, FetchError, FormValue, HttpFuture, HttpTransport, MultipartForm,
        PreparedRequest, RawResponse, RequestBody, ResponseBody,
    };

    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
        base_url: Option<String>,
    }

    impl Default for ReqwestTransport {
        fn default() -> Self {
            Self::new(Client::new())
        }
    }

    impl ReqwestTransport {
        pub fn new(client: Client) -> Self {
            Self {
                client,
                base_url: None,
            }
        }

        /// Relative request addresses are joined onto `base_url`. Absolute
        /// addresses are sent unchanged.
        pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
            self.base_url = Some(base_url.into());
            self
        }

        pub fn base_url(&self) -> Option<&str> {
            self.base_url.as_deref()
        }

        pub(crate) fn endpoint(&self, url: &str) -> String {
            match &self.base_url {
                Some(base_url) if Url::parse(url).is_err() => format!(
                    "{}/{}",
                    base_url.trim_end_matches('/'),
                    url.trim_start_matches('/')
                ),
                _ => url.to_string(),
            }
        }

        fn build(&self, request: PreparedRequest) -> Result<RequestBuilder, FetchError> {
            let endpoint = self.endpoint(&request.url);
            let url = Url::parse(&endpoint).map_err(|err| {
                FetchError::invalid_request(format!("invalid request url `{endpoint}`: {err}"))
            })?;
            let mut headers = request.headers;

            let builder = match request.body {
                None => self.client.request(request.method, url).headers(headers),
                Some(RequestBody::Multipart(form)) => {
                    // The boundary lives in the content type, so reqwest must own it.
                    headers.remove(CONTENT_TYPE);
                    self.client
                        .request(request.method, url)
                        .headers(headers)
                        .multipart(build_form(form)?)
                }
                Some(body) => {
                    let bytes = body.to_bytes()?.unwrap_or_default();
                    self.client
                        .request(request.method, url)
                        .headers(headers)
                        .body(bytes)
                }
            };

            Ok(builder)
        }
    }

    fn build_form(form: MultipartForm) -> Result<Form, FetchError> {
        let mut output = Form::new();

        for part in form.parts().iter().cloned() {
            output = match part.value {
                FormValue::Text(value) => output.text(part.name, value),
                FormValue::Bytes {
                    data,
                    file_name,
                    mime_type,
                } => {
                    let mut bytes = Part::bytes(data);
                    if let Some(file_name) = file_name {
                        bytes = bytes.file_name(file_name);
                    }
                    if let Some(mime_type) = mime_type {
                        bytes = bytes
                            .mime_str(&mime_type)
                            .map_err(|err| FetchError::invalid_request(err.to_string()))?;
                    }
                    output.part(part.name, bytes)
                }
            };
        }

        Ok(output)
    }

    struct ReqwestBody(Response);

    impl BodySource for ReqwestBody {
        fn read(self: Box<Self>) -> HttpFuture<'static, Result<Vec<u8>, FetchError>> {
            Box::pin(async move {
                let bytes = self.0.bytes().await?;
                Ok(bytes.to_vec())
            })
        }
    }

    impl HttpTransport for ReqwestTransport {
        fn send<'a>(
            &'a self,
            request: PreparedRequest,
        ) -> HttpFuture<'a, Result<RawResponse, FetchError>> {
            Box::pin(async move {
                let response = self.build(request)?.send().await?;
                let status = response.status().as_u16();
                let headers = response.headers().clone();

                Ok(RawResponse::new(
                    status,
                    headers,
                    ResponseBody::from_source(ReqwestBody(response)),
                ))
            })
        }
    }

}
