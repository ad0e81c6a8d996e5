pub mod cancel;
pub mod conn;
pub mod retry;

pub mod grpc {
    pub use tonic::metadata;
    pub use tonic::{Code, IntoRequest, IntoStreamingRequest, Request, Response, Status, Streaming};
}

/// Name of the metadata entry the frontend reads routing parameters from.
pub const REQUEST_PARAMS_HEADER: &str = "x-goog-request-params";

fn append_params<T>(param_string: &str, request: &mut grpc::Request<T>) {
    if param_string.is_empty() {
        return;
    }
    match param_string.parse() {
        Ok(value) => {
            request.metadata_mut().append(REQUEST_PARAMS_HEADER, value);
        }
        Err(e) => tracing::warn!("skip invalid request params {param_string}: {e}"),
    }
}

/// Wraps a unary request and attaches the routing parameters.
pub fn create_request<T>(param_string: String, into_request: impl grpc::IntoRequest<T>) -> grpc::Request<T> {
    let mut request = into_request.into_request();
    append_params(&param_string, &mut request);
    request
}

/// Streaming counterpart of [`create_request`].
pub fn create_streaming_request<S>(param_string: String, into_request: S) -> grpc::Request<S::Stream>
where
    S: grpc::IntoStreamingRequest,
{
    let mut request = into_request.into_streaming_request();
    append_params(&param_string, &mut request);
    request
}

#[cfg(test)]
mod tests {
    use crate::{create_request, create_streaming_request, REQUEST_PARAMS_HEADER};

    #[test]
    fn test_create_request() {
        let request = create_request("bucket=projects%2F_%2Fbuckets%2Fb".to_string(), 1u32);
        let value = request.metadata().get(REQUEST_PARAMS_HEADER).unwrap();
        assert_eq!(value.to_str().unwrap(), "bucket=projects%2F_%2Fbuckets%2Fb");

        let request = create_request(String::new(), 1u32);
        assert!(request.metadata().get(REQUEST_PARAMS_HEADER).is_none());

        let request = create_request("bad\nvalue".to_string(), 1u32);
        assert!(request.metadata().get(REQUEST_PARAMS_HEADER).is_none());
    }

    #[test]
    fn test_create_streaming_request() {
        let request = create_streaming_request("bucket=b".to_string(), tokio_stream::iter(vec![1u32, 2u32]));
        assert_eq!(
            request.metadata().get(REQUEST_PARAMS_HEADER).unwrap().to_str().unwrap(),
            "bucket=b"
        );
    }
}
