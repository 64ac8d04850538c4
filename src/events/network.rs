use crate::dataset::Dataset;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    LoadDataset,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    dataset: &'a Dataset,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, dataset: &'a Dataset) -> Self {
        Handler { state, dataset }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadDataset => self.load_dataset().await?,
        }
        Ok(())
    }

    /// Fetch the dataset text and hand it to the state, or record the
    /// failure so the listing shows the load error.
    ///
    async fn load_dataset(&mut self) -> Result<()> {
        info!("Fetching projects from '{}'...", self.dataset.source());
        match self.dataset.fetch().await {
            Ok(raw) => {
                info!("Received {} bytes of project data.", raw.len());
                let mut state = self.state.lock().await;
                state.set_dataset(&raw);
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch projects: {}", e);
                let mut source = e.source();
                while let Some(err) = source {
                    error!("  Caused by: {}", err);
                    source = err.source();
                }
                let mut state = self.state.lock().await;
                state.set_load_failed(&e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{self, Listing};
    use crate::catalog::Mode;
    use crate::dataset::Source;
    use crate::state::Phase;
    use httpmock::prelude::*;

    fn shared_state() -> Arc<Mutex<State>> {
        Arc::new(Mutex::new(State::default()))
    }

    #[tokio::test]
    async fn load_dataset_populates_state() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/dados_individuais.txt");
                then.status(200)
                    .body("1º A|Ana Souza|Calculadora|https://calc.test|Ana, Bea\n");
            })
            .await;
        let dataset =
            Dataset::new(Source::parse(&server.url("/dados_individuais.txt"))).unwrap();
        let state = shared_state();

        let mut handler = Handler::new(&state, &dataset);
        handler.handle(Event::LoadDataset).await.unwrap();

        mock.assert_async().await;
        let state = state.lock().await;
        assert_eq!(state.get_phase(), Phase::Loaded);
        assert_eq!(state.get_mode(), Mode::Individual);
        match state.listing() {
            Listing::Cards(cards) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].title, "Calculadora");
            }
            other => panic!("unexpected listing {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_dataset_records_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/dados_individuais.txt");
                then.status(500).body("boom");
            })
            .await;
        let dataset =
            Dataset::new(Source::parse(&server.url("/dados_individuais.txt"))).unwrap();
        let state = shared_state();

        let mut handler = Handler::new(&state, &dataset);
        assert!(handler.handle(Event::LoadDataset).await.is_err());

        let state = state.lock().await;
        assert_eq!(state.get_phase(), Phase::LoadFailed);
        assert!(state.get_load_error().unwrap().contains("500"));
        assert_eq!(state.listing(), cards::load_failed());
        assert!(state.get_catalog().is_empty());
    }
}
