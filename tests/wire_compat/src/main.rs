fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::future::Future;
    use std::path::PathBuf;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};

    use chrono::DateTime;
    use freestuff_client::transport::StatusCode;
    use freestuff_client::{
        Client, Error, GameCategory, HttpRequest, HttpResponse, Transport, TransportError,
    };

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture file verbatim.
    fn load_fixture(name: &str) -> String {
        let path = fixtures_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
    }

    /// Serves a single fixture body for every request and records the URLs
    /// it was asked for.
    #[derive(Clone)]
    struct FixtureTransport {
        status: StatusCode,
        body: String,
        urls: Arc<Mutex<Vec<String>>>,
    }

    impl FixtureTransport {
        fn new(status: u16, fixture: &str) -> Self {
            Self {
                status: StatusCode::from_u16(status).unwrap(),
                body: load_fixture(fixture),
                urls: Arc::default(),
            }
        }

        fn raw(status: u16, body: &str) -> Self {
            Self {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.to_string(),
                urls: Arc::default(),
            }
        }

        fn urls(&self) -> Vec<String> {
            self.urls.lock().unwrap().clone()
        }
    }

    impl Transport for FixtureTransport {
        fn execute(
            &self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + '_>>
        {
            self.urls.lock().unwrap().push(request.url);
            let resp = HttpResponse {
                status: self.status,
                body: self.body.clone().into_bytes(),
            };
            Box::pin(async move { Ok::<_, TransportError>(resp) })
        }
    }

    fn client(transport: &FixtureTransport) -> Client {
        Client::with_transport("test-api-key", transport.clone()).unwrap()
    }

    // --- Game info ---

    #[tokio::test]
    async fn fixture_game_info_443200() {
        let transport = FixtureTransport::new(200, "game_info_response_443200.json");
        let games = client(&transport).get_game_info(&[443200]).await.unwrap();

        assert_eq!(
            transport.urls(),
            vec!["https://api.freestuffbot.xyz/v1/game/443200/info"]
        );
        assert_eq!(games.len(), 1, "a single game info should be returned");

        let game = &games[0];
        assert_eq!(game.id, 443200);
        assert_eq!(game.title, "The Evil Within");
        assert!(!game.description.is_empty());
        assert_eq!(game.until, DateTime::from_timestamp(1_698_332_400, 0));
        assert_eq!(game.kind, "game");
        assert_eq!(game.store, "epic");
        assert_eq!(
            game.urls.default,
            "https://redirect.freestuffbot.xyz/game/GYpU#The-Evil-Within"
        );
        assert_eq!(game.urls.browser, game.urls.default);
        assert_eq!(
            game.urls.org,
            "https://store.epicgames.com/p/the-evil-within"
        );
        assert_eq!(
            game.urls.client.as_deref(),
            Some("https://redirect.freestuffbot.xyz/game/mviK")
        );
    }

    #[tokio::test]
    async fn fixture_game_info_batch() {
        let transport = FixtureTransport::new(200, "game_info_response_forever.json");
        let requested = [441967, 440251];
        let games = client(&transport).get_game_info(&requested).await.unwrap();

        assert_eq!(
            transport.urls(),
            vec!["https://api.freestuffbot.xyz/v1/game/441967+440251/info"]
        );

        // Order is unspecified; compare as sets.
        let ids: HashSet<i64> = games.iter().map(|g| g.id).collect();
        assert_eq!(ids, HashSet::from(requested));
        freestuff_client::validate::check_game_infos(&requested, &games).unwrap();

        let forever = games.iter().find(|g| g.id == 441967).unwrap();
        assert!(forever.is_free_forever());
        assert!(forever.urls.client.is_none());

        let weekend = games.iter().find(|g| g.id == 440251).unwrap();
        assert_eq!(weekend.until.unwrap().timestamp(), 1_700_000_000);
        assert_eq!(weekend.kind, "dlc");
        assert_eq!(weekend.urls.client.as_deref(), Some("steam://store/987650"));
    }

    // --- Game list ---

    #[tokio::test]
    async fn fixture_game_list_every_category() {
        for category in [GameCategory::All, GameCategory::Approved, GameCategory::Free] {
            let transport = FixtureTransport::new(200, "game_list_response.json");
            let ids = client(&transport).get_game_ids(category).await.unwrap();

            assert_eq!(ids, vec![443200, 441967, 440251, 439980]);
            assert_eq!(
                transport.urls(),
                vec![format!("https://api.freestuffbot.xyz/v1/games/{category}")]
            );
        }
    }

    // --- Error envelope ---

    #[tokio::test]
    async fn fixture_error_envelope_on_every_endpoint() {
        let transport = FixtureTransport::new(401, "error_response_bad_key.json");
        let client = client(&transport);

        let errors = [
            client.ping().await.unwrap_err(),
            client.get_game_ids(GameCategory::Free).await.unwrap_err(),
            client.get_game_info(&[443200]).await.unwrap_err(),
        ];

        for err in errors {
            assert!(matches!(err, Error::Api { status: 401, .. }), "got {err:?}");
            assert_eq!(err.api_message(), Some("bad key"));
        }
    }

    // --- Malformed bodies ---

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let transport = FixtureTransport::raw(200, "<!doctype html><p>maintenance</p>");
        let client = client(&transport);

        let ids_err = client.get_game_ids(GameCategory::Free).await.unwrap_err();
        assert!(matches!(ids_err, Error::Decode { .. }), "got {ids_err:?}");

        let info_err = client.get_game_info(&[1, 2]).await.unwrap_err();
        assert!(matches!(info_err, Error::Decode { .. }), "got {info_err:?}");
    }

    #[tokio::test]
    async fn wrong_shape_is_decode_error() {
        // A list body where the info endpoint expects a keyed map.
        let transport = FixtureTransport::new(200, "game_list_response.json");
        let err = client(&transport).get_game_info(&[1]).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    }
}
