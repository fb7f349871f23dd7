use axum::extract::Path;

pub async fn hello() -> &'static str {
    "Hello KROS!"
}

/// `number` must parse as an `i32`; otherwise the path extractor answers 400.
pub async fn hello_name(Path((name, number)): Path<(String, i32)>) -> String {
    format!("Hello {} - {}!", name, number)
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{body_text, send, test_app};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_hello() {
        let (app, _) = test_app(&[]);
        let res = send(&app, Method::GET, "/hello", None).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "Hello KROS!");
    }

    #[tokio::test]
    async fn test_hello_name() {
        let (app, _) = test_app(&[]);
        let res = send(&app, Method::GET, "/hello/Sam/5", None).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "Hello Sam - 5!");

        let res = send(&app, Method::GET, "/hello/Sam/-12", None).await;
        assert_eq!(body_text(res).await, "Hello Sam - -12!");
    }

    #[tokio::test]
    async fn test_hello_name_rejects_non_integer() {
        let (app, _) = test_app(&[]);
        let res = send(&app, Method::GET, "/hello/Sam/five", None).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
