mod common;

#[cfg(test)]
mod tests {
    use crate::common::{date, USER_ID};
    use autolog::api::{ApiOutcome, SevenPace, TimeTrackerApi};
    use autolog::libs::activity::ActivityType;
    use autolog::libs::config::SevenPaceConfig;
    use autolog::libs::task::TaskTemplate;
    use autolog::libs::worklog::WorkLogEntry;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "test-token";

    fn client(server: &MockServer) -> SevenPace {
        SevenPace::new(&SevenPaceConfig {
            api_url: format!("{}/api/rest/", server.uri()),
            api_token: TOKEN.to_string(),
        })
    }

    fn entry() -> WorkLogEntry {
        let template = TaskTemplate::new(3, ActivityType::Development, "DevOps");
        WorkLogEntry::from_template(&template, date(2024, 1, 2), USER_ID)
    }

    #[tokio::test]
    async fn test_current_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest/me"))
            .and(query_param("api-version", "3.2-beta"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "user": { "id": USER_ID, "name": "Jane" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client(&server).current_user().await.unwrap();

        assert_eq!(user.id, USER_ID);
    }

    #[tokio::test]
    async fn test_current_user_unauthorized_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let error = client(&server).current_user().await.unwrap_err();

        assert!(error.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_work_logs_for_a_day() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest/workLogs"))
            .and(query_param("api-version", "3.2-beta"))
            .and(query_param("$fromTimestamp", "2024-01-02T00:00:00"))
            .and(query_param("$toTimestamp", "2024-01-02T23:59:00"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        "id": "log-1",
                        "length": 25200,
                        "comment": "Congés",
                        "timestamp": "2024-01-02T00:00:00",
                        "user": { "id": USER_ID },
                        "activityType": { "id": "61e63283-5eec-4853-9a1a-a15550da0d46", "name": "17. OoB : Time off" }
                    },
                    {
                        "id": "log-2",
                        "length": 7200,
                        "comment": null,
                        "timestamp": "2024-01-02T09:30:00Z",
                        "userId": "someone-else",
                        "activityTypeId": "0000"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let logs = client(&server).work_logs(date(2024, 1, 2)).await.unwrap();

        assert_eq!(logs.len(), 2);
        assert!(logs[0].is_day_off());
        assert!(logs[0].is_full_day(7));
        assert_eq!(logs[0].comment, "Congés");
        assert_eq!(logs[1].activity, ActivityType::Other("0000".to_string()));
        assert_eq!(logs[1].hours(), 2.0);
        assert_eq!(logs[1].comment, "");
        assert_eq!(logs[0].timestamp.map(|t| t.to_rfc3339()).as_deref(), Some("2024-01-02T00:00:00+00:00"));
        assert_eq!(logs[0].user_id.as_deref(), Some(USER_ID));
        assert_eq!(logs[1].timestamp.map(|t| t.to_rfc3339()).as_deref(), Some("2024-01-02T09:30:00+00:00"));
        assert_eq!(logs[1].user_id.as_deref(), Some("someone-else"));
    }

    #[tokio::test]
    async fn test_malformed_work_logs_are_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest/workLogs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        assert!(client(&server).work_logs(date(2024, 1, 2)).await.is_err());
    }

    #[tokio::test]
    async fn test_create_work_log_posts_the_entry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rest/workLogs"))
            .and(query_param("api-version", "3.2-beta"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(json!({
                "timestamp": "2024-01-02T00:00:00Z",
                "length": 10800,
                "comment": "DevOps",
                "userId": USER_ID,
                "activityTypeId": "c30c3a6d-aacd-46b2-833d-acd3d33d830d",
                "workItemId": null
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": "created-1" } })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client(&server).create_work_log(&entry()).await.unwrap();

        assert_eq!(outcome, ApiOutcome::Done(Some("created-1".to_string())));
    }

    #[tokio::test]
    async fn test_create_rejection_keeps_the_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rest/workLogs"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Work log overlaps"))
            .mount(&server)
            .await;

        let outcome = client(&server).create_work_log(&entry()).await.unwrap();

        assert_eq!(
            outcome,
            ApiOutcome::Rejected {
                status: 400,
                reason: "Work log overlaps".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_delete_work_log() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/rest/workLogs/log-1"))
            .and(query_param("api-version", "3.2-beta"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/rest/workLogs/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = client(&server);

        assert_eq!(api.delete_work_log("log-1").await.unwrap(), ApiOutcome::Done(()));
        assert_eq!(
            api.delete_work_log("missing").await.unwrap(),
            ApiOutcome::Rejected {
                status: 404,
                reason: "Not Found".to_string(),
            }
        );
    }
}
