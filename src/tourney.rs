//! Batch phase: resolve a Riot ID, fetch its recent matches one by one and write the report.

use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::report::{format_scoreboard, render_report, write_report};
use crate::riot::{MatchHistorySource, MatchIdsQuery};
use crate::riot_id::RiotId;

/// Fetch everything needed for the report and return the file content.
///
/// Match details are requested sequentially in the order of the id list, once per id.
/// The first failing call aborts the whole run.
pub async fn build_report<S>(
    source: &S,
    riot_id: &RiotId,
    query: &MatchIdsQuery,
) -> Result<String, AppError>
where
    S: MatchHistorySource + ?Sized,
{
    let account = source.account_by_riot_id(riot_id).await?;
    info!(%riot_id, puuid = %account.puuid, "account resolved");

    let match_ids = source.match_ids(&account.puuid, query).await?;
    info!(
        count = match_ids.len(),
        match_type = %query.match_type,
        "match ids fetched"
    );

    let mut blocks = Vec::with_capacity(match_ids.len());
    for match_id in &match_ids {
        let match_data = source.match_by_id(match_id).await?;
        tracing::debug!(%match_id, "match fetched");
        blocks.push(format_scoreboard(&match_data));
    }

    Ok(render_report(&blocks))
}

/// Build the report then overwrite `output_path` with it. Nothing is written on failure.
pub async fn run<S>(
    source: &S,
    riot_id: &RiotId,
    query: &MatchIdsQuery,
    output_path: &Path,
) -> Result<(), AppError>
where
    S: MatchHistorySource + ?Sized,
{
    let content = build_report(source, riot_id, query).await?;

    write_report(output_path, &content).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::report::NO_MATCHES;
    use crate::report::tests::{dummy_match, dummy_participant, temp_path};
    use crate::riot::{AccountDto, MatchDto, RiotClient};

    /// In-memory source recording every call it receives.
    struct FakeSource {
        match_ids: Vec<String>,
        fail_on: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(match_ids: &[&str]) -> Self {
            Self {
                match_ids: match_ids.iter().map(|s| s.to_string()).collect(),
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl MatchHistorySource for FakeSource {
        async fn account_by_riot_id(&self, riot_id: &RiotId) -> Result<AccountDto, AppError> {
            self.record(format!("account:{riot_id}"));
            Ok(AccountDto { puuid: "P1".into() })
        }

        async fn match_ids(
            &self,
            puuid: &str,
            query: &MatchIdsQuery,
        ) -> Result<Vec<String>, AppError> {
            self.record(format!("ids:{puuid}:{}:{}", query.match_type, query.count));
            Ok(self.match_ids.clone())
        }

        async fn match_by_id(&self, match_id: &str) -> Result<MatchDto, AppError> {
            self.record(format!("match:{match_id}"));
            if self.fail_on.as_deref() == Some(match_id) {
                return Err(AppError::RiotApi {
                    status: 500,
                    status_text: "Internal Server Error".into(),
                    body: String::new(),
                });
            }
            Ok(dummy_match(
                match_id,
                vec![dummy_participant("Alpha", "Ahri", (5, 2, 7))],
            ))
        }
    }

    fn foo() -> RiotId {
        "Foo#NA1".parse().unwrap()
    }

    #[tokio::test]
    async fn empty_history_writes_placeholder_without_match_calls() {
        let source = FakeSource::new(&[]);
        let path = temp_path();

        run(&source, &foo(), &MatchIdsQuery::default(), &path)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), NO_MATCHES);
        assert_eq!(source.calls(), vec!["account:Foo#NA1", "ids:P1:tourney:15"]);
    }

    #[tokio::test]
    async fn matches_are_fetched_in_list_order_once_each() {
        let source = FakeSource::new(&["M3", "M1", "M2"]);

        let content = build_report(&source, &foo(), &MatchIdsQuery::default())
            .await
            .unwrap();

        assert_eq!(
            source.calls(),
            vec![
                "account:Foo#NA1",
                "ids:P1:tourney:15",
                "match:M3",
                "match:M1",
                "match:M2",
            ]
        );
        let m3 = content.find("Game ID: M3").unwrap();
        let m1 = content.find("Game ID: M1").unwrap();
        let m2 = content.find("Game ID: M2").unwrap();
        assert!(m3 < m1 && m1 < m2);
    }

    #[tokio::test]
    async fn failing_match_aborts_without_writing() {
        let mut source = FakeSource::new(&["M1", "M2", "M3"]);
        source.fail_on = Some("M2".into());
        let path = temp_path();

        let res = run(&source, &foo(), &MatchIdsQuery::default(), &path).await;

        assert!(matches!(res, Err(AppError::RiotApi { status: 500, .. })));
        assert!(!path.exists());
        assert_eq!(source.calls().last().map(String::as_str), Some("match:M2"));
    }

    #[tokio::test]
    async fn custom_query_is_forwarded() {
        let source = FakeSource::new(&[]);
        let query = MatchIdsQuery {
            match_type: "ranked".into(),
            count: 3,
        };

        build_report(&source, &foo(), &query).await.unwrap();

        assert_eq!(source.calls()[1], "ids:P1:ranked:3");
    }

    #[tokio::test]
    async fn end_to_end_against_mock_riot_api() {
        let server = MockServer::start_async().await;
        let account = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/riot/account/v1/accounts/by-riot-id/Foo/NA1")
                    .query_param("api_key", "RGAPI-test");
                then.status(200).json_body(json!({ "puuid": "P1" }));
            })
            .await;
        let ids = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/lol/match/v5/matches/by-puuid/P1/ids")
                    .query_param("type", "tourney")
                    .query_param("count", "15");
                then.status(200).json_body(json!(["M1"]));
            })
            .await;
        let detail = server
            .mock_async(|when, then| {
                when.method(GET).path("/lol/match/v5/matches/M1");
                then.status(200).json_body(json!({
                    "metadata": { "matchId": "M1" },
                    "info": { "participants": [
                        { "riotIdGameName": "Alpha", "championName": "Ahri", "kills": 5, "deaths": 2, "assists": 7 },
                        { "riotIdGameName": "Beta", "championName": "Garen", "kills": 0, "deaths": 10, "assists": 3 }
                    ]}
                }));
            })
            .await;

        let client =
            RiotClient::with_base_urls("RGAPI-test".into(), server.base_url(), server.base_url());
        let path = temp_path();

        run(&client, &foo(), &MatchIdsQuery::default(), &path)
            .await
            .unwrap();

        account.assert_async().await;
        ids.assert_async().await;
        detail.assert_hits_async(1).await;

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Game ID: M1\n\
             Player              Champion          K   D   A\n\
             -----------------------------------------------\n\
             Alpha               Ahri              5   2   7\n\
             Beta                Garen             0  10   3\n"
        );
    }

    #[tokio::test]
    async fn not_found_account_leaves_existing_file_untouched() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/by-riot-id/");
                then.status(404).body("Data not found");
            })
            .await;
        let ids = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/ids");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client =
            RiotClient::with_base_urls("RGAPI-test".into(), server.base_url(), server.base_url());
        let path = temp_path();
        std::fs::write(&path, "previous run\n").unwrap();

        let err = run(&client, &foo(), &MatchIdsQuery::default(), &path)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::RiotApi { status: 404, .. }));
        assert!(err.to_string().contains("404"));
        ids.assert_hits_async(0).await;
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\n");
    }
}
