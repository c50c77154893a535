//! Integration tests for the mailbox command endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use postbox::mailbox::store;

    use crate::test_utils::{body_to_string, test_context};

    /// Tests emptying a full mailbox through the API
    #[tokio::test]
    async fn it_empties_a_full_mailbox() {
        let ctx = test_context().await;
        ctx.mailbox.detect(5.0).await.unwrap();

        let response = ctx
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/mailbox/empty")
                    .method("POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"success\":true"));
        assert!(body.contains("\"has_mail\":false"));

        // The persisted row agrees
        let row = store::load_mailbox(&ctx.db, 1).await.unwrap().unwrap();
        assert_eq!(row, (false, None));
    }

    /// Tests that emptying an already-empty mailbox still succeeds
    #[tokio::test]
    async fn it_empties_idempotently() {
        let ctx = test_context().await;

        for _ in 0..2 {
            let response = ctx
                .app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/mailbox/empty")
                        .method("POST")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let body = body_to_string(response.into_body()).await;
            assert!(body.contains("\"has_mail\":false"));
        }
    }

    /// Tests recording a delivery through the API
    #[tokio::test]
    async fn it_records_submitted_mail() {
        let ctx = test_context().await;

        let response = ctx
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/mailbox/mail")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "subject": "Water bill",
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"success\":true"));
        assert!(body.contains("\"id\":1"));

        let snapshot = ctx.mailbox.snapshot().await;
        assert!(snapshot.has_mail);
        assert_eq!(snapshot.last_mail_id, Some(1));
    }

    /// Tests that a malformed submit body returns 422
    #[tokio::test]
    async fn it_returns_422_for_malformed_submit() {
        let ctx = test_context().await;

        let response = ctx
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/mailbox/mail")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "subject": 42,
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// Tests that commands against a missing mailbox row surface 404
    #[tokio::test]
    async fn it_returns_404_for_a_missing_mailbox() {
        let ctx = test_context().await;

        ctx.db
            .call(|conn| {
                conn.execute("DELETE FROM mailbox WHERE id = 1", [])?;
                Ok(())
            })
            .await
            .unwrap();

        let response = ctx
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/mailbox/mail")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::json!({}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
