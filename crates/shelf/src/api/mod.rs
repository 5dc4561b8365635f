use serde::de::DeserializeOwned;

pub(crate) mod endpoints;
pub(crate) mod open_library;

pub trait Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

/// Builds the blocking HTTP client used against the real API.
///
/// Requests block until the transport returns or errors, no timeout is set.
pub(crate) fn http_client() -> Result<reqwest::blocking::Client, Error> {
    reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .map_err(|e| Error::wrap(ErrorKind::IO, e).context("cannot build the HTTP client"))
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        trace!("GET {url}");
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};
use log::trace;

#[cfg(test)]
mod test {

    use super::*;

    thread_local! {
        pub(crate) static URL_SINK: std::cell::RefCell<Vec<String>> = std::cell::RefCell::new(Vec::new());
    }

    /// Asserts that the expected URL is the last one provided to the [`MockClient`].
    ///
    /// The [`MockClient`] pushes every URL it is given into the thread local `URL_SINK`, so
    /// tests can also inspect the whole request history with `URL_SINK.with(..)`.
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK.with(|urls| urls.borrow().last().cloned().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    /// Produces the response text for a requested URL.
    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce(url: &str) -> Result<T, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer<String> = EmptyTextProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer<String>> Client for MockClient<P> {
        fn get_json<T>(&self, url: &str) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            URL_SINK.with(|sink| sink.borrow_mut().push(url.to_owned()));
            P::produce(url).and_then(|json| {
                serde_json::from_str(&json).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
            })
        }
    }

    macro_rules! impl_text_producer {
        ($($producer:ident => |$url:ident| $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<String> for $producer {
                    #[allow(unused_variables)]
                    fn produce($url: &str) -> Result<String, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_text_producer! {
        EmptyTextProducer => |url| Ok("".to_owned()),
        NetworkErrorProducer => |url| Err(Error::new(ErrorKind::IO, "Network error")),
    }

    pub(crate) use assert_url;
    pub(crate) use impl_text_producer;
}
