use anyhow::{anyhow, Context};
use edacore::{DashboardViewModel, UiEvent};
use log::info;
use std::{
    net::SocketAddr,
    sync::{mpsc, Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{Filter, Rejection, Reply};

type SharedViewModel = Arc<RwLock<DashboardViewModel>>;

pub fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct PoisonedSession;

impl warp::reject::Reject for PoisonedSession {}

/// HTTP bridge that lets a presentation client drive one dashboard session.
///
/// The write lock serializes interactions so each event runs its full
/// recomputation before the next one is accepted.
pub struct DashboardBridge {
    view_model: SharedViewModel,
}

impl DashboardBridge {
    pub fn new(view_model: DashboardViewModel) -> Self {
        Self {
            view_model: Arc::new(RwLock::new(view_model)),
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone + Send + Sync + 'static
    {
        let shared = self.view_model.clone();
        let session = warp::any().map(move || shared.clone());

        let view_route = warp::path("view")
            .and(warp::path::end())
            .and(warp::get())
            .and(session.clone())
            .and_then(|session: SharedViewModel| async move { view_reply(&session) });

        let state_route = warp::path("state")
            .and(warp::path::end())
            .and(warp::get())
            .and(session.clone())
            .and_then(|session: SharedViewModel| async move { state_reply(&session) });

        let event_route = warp::path("event")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(session)
            .and_then(|event: UiEvent, session: SharedViewModel| async move {
                event_reply(&session, event)
            });

        view_route.or(state_route).or(event_route)
    }

    /// Serves the routes from a dedicated thread until the process exits.
    ///
    /// Returns the bound address once the listener is up, or the bind error.
    pub fn spawn(&self, addr: SocketAddr) -> anyhow::Result<SocketAddr> {
        let routes = self.routes();
        let (bound_tx, bound_rx) = mpsc::channel::<Result<SocketAddr, String>>();
        thread::Builder::new()
            .name("dashboard-bridge".into())
            .spawn(move || {
                let runtime = match Builder::new_current_thread().enable_all().build() {
                    Ok(runtime) => runtime,
                    Err(err) => {
                        let _ = bound_tx.send(Err(format!("building bridge runtime: {err}")));
                        return;
                    }
                };
                runtime.block_on(async move {
                    match warp::serve(routes).try_bind_ephemeral(addr) {
                        Ok((bound, server)) => {
                            let _ = bound_tx.send(Ok(bound));
                            server.await;
                        }
                        Err(err) => {
                            let _ = bound_tx.send(Err(format!("binding {addr}: {err}")));
                        }
                    }
                });
            })
            .context("spawning dashboard bridge thread")?;

        let addr = bound_rx
            .recv()
            .context("dashboard bridge thread exited before binding")?
            .map_err(|reason| anyhow!("dashboard bridge failed: {reason}"))?;
        info!("dashboard bridge listening on http://{addr}");
        Ok(addr)
    }

    pub fn publish_status(&self, message: &str) {
        info!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> edacore::DashboardView {
        self.view_model.read().unwrap().view().clone()
    }
}

fn view_reply(session: &SharedViewModel) -> Result<warp::reply::Json, Rejection> {
    let guard = session
        .read()
        .map_err(|_| warp::reject::custom(PoisonedSession))?;
    Ok(warp::reply::json(guard.view()))
}

fn state_reply(session: &SharedViewModel) -> Result<warp::reply::Json, Rejection> {
    let guard = session
        .read()
        .map_err(|_| warp::reject::custom(PoisonedSession))?;
    Ok(warp::reply::json(guard.state()))
}

fn event_reply(session: &SharedViewModel, event: UiEvent) -> Result<warp::reply::Json, Rejection> {
    let mut guard = session
        .write()
        .map_err(|_| warp::reject::custom(PoisonedSession))?;
    info!("[bridge] {:?}", event);
    Ok(warp::reply::json(guard.handle(event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::DashboardConfig;
    use crate::workflow::runner::Runner;
    use edacore::{ChartType, DatasetName};
    use serde_json::Value;

    fn bridge() -> DashboardBridge {
        let runner = Runner::new(DashboardConfig::from_args(2, Default::default()));
        DashboardBridge::new(runner.execute().unwrap())
    }

    #[tokio::test]
    async fn view_route_returns_current_view() {
        let bridge = bridge();
        let response = warp::test::request()
            .method("GET")
            .path("/view")
            .reply(&bridge.routes())
            .await;
        assert_eq!(response.status(), 200);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["summary"]["heading"], "All Tracks - Summary Statistics");
        assert_eq!(body["chart"]["kind"], "bar");
    }

    #[tokio::test]
    async fn event_route_applies_interaction() {
        let bridge = bridge();
        let routes = bridge.routes();
        let response = warp::test::request()
            .method("POST")
            .path("/event")
            .json(&UiEvent::ChartTypeSelected("Scatter Plot".into()))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 200);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["chart"]["kind"], "scatter");
        assert_eq!(bridge.snapshot().state.chart_type, ChartType::ScatterPlot);

        let response = warp::test::request()
            .method("GET")
            .path("/state")
            .reply(&routes)
            .await;
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["chart_type"], "Scatter Plot");
    }

    #[test]
    fn spawn_reports_address_in_use() {
        let bound = bridge()
            .spawn(SocketAddr::from(([127, 0, 0, 1], 0)))
            .unwrap();
        assert_ne!(bound.port(), 0);

        let err = bridge().spawn(bound).unwrap_err();
        assert!(err.to_string().contains("dashboard bridge failed"));
    }

    #[tokio::test]
    async fn invalid_event_keeps_state() {
        let bridge = bridge();
        let response = warp::test::request()
            .method("POST")
            .path("/event")
            .json(&UiEvent::DatasetSelected(Some("Local Tracks".into())))
            .reply(&bridge.routes())
            .await;
        assert_eq!(response.status(), 200);
        assert_eq!(bridge.snapshot().state.selected_dataset, DatasetName::AllTracks);
    }
}
