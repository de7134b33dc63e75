//! Background fetch of the NEO catalog.
//!
//! Startup spawns the fetch on Bevy's IO task pool. A polling system checks
//! the task once per frame without blocking and installs the result into
//! [`BodyCatalog`], or the built-in demo set when the fetch failed.

use std::sync::Arc;

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};

use crate::neo::{DateRange, NearEarthObject, NeoSource, NetworkError, demo_bodies};
use crate::types::current_unix_seconds;
use crate::ui::notifications::{NotificationKind, Notifications};

/// The injected data source. Inserted by the composition root.
#[derive(Resource, Clone)]
pub struct NeoSourceHandle(pub Arc<dyn NeoSource>);

impl NeoSourceHandle {
    pub fn new(source: impl NeoSource) -> Self {
        Self(Arc::new(source))
    }
}

/// Where the current catalog came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Live,
    Demo,
}

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded { source: DataSource },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The bodies currently on display.
///
/// Replaced as a whole; systems reading it see either the old or the new
/// list.
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyCatalog {
    pub bodies: Vec<NearEarthObject>,
    pub source: DataSource,
}

/// The in-flight fetch, removed once it completes.
#[derive(Resource)]
pub struct PendingFetch(pub Task<Result<Vec<NearEarthObject>, NetworkError>>);

/// Set containing the catalog swap; field systems run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogSet;

pub struct LoaderPlugin;

impl Plugin for LoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyCatalog>()
            .init_resource::<LoadState>()
            .init_resource::<Notifications>()
            .add_systems(Startup, start_fetch)
            .add_systems(Update, poll_fetch.in_set(CatalogSet));
    }
}

/// Kick off the feed fetch for the coming week.
pub fn start_fetch(
    mut commands: Commands,
    source: Option<Res<NeoSourceHandle>>,
    mut catalog: ResMut<BodyCatalog>,
    mut state: ResMut<LoadState>,
    mut notifications: ResMut<Notifications>,
) {
    let Some(source) = source else {
        warn!("No NEO data source configured, showing demo data");
        install_demo(&mut catalog, &mut state, &mut notifications);
        return;
    };

    let source = Arc::clone(&source.0);
    let range = DateRange::week_starting(current_unix_seconds());
    info!(
        start = %range.start_date(),
        end = %range.end_date(),
        "Fetching approaching NEOs"
    );

    let task = IoTaskPool::get().spawn(async move { source.fetch_approaching_bodies(&range) });
    commands.insert_resource(PendingFetch(task));
    *state = LoadState::Loading;
}

/// Check the pending fetch without blocking and install its result.
pub fn poll_fetch(
    mut commands: Commands,
    pending: Option<ResMut<PendingFetch>>,
    mut catalog: ResMut<BodyCatalog>,
    mut state: ResMut<LoadState>,
    mut notifications: ResMut<Notifications>,
) {
    let Some(mut pending) = pending else {
        return;
    };
    let Some(result) = block_on(future::poll_once(&mut pending.0)) else {
        return;
    };
    commands.remove_resource::<PendingFetch>();
    apply_fetch_result(result, &mut catalog, &mut state, &mut notifications);
}

/// Install a finished fetch, degrading to the demo set on error.
pub fn apply_fetch_result(
    result: Result<Vec<NearEarthObject>, NetworkError>,
    catalog: &mut BodyCatalog,
    state: &mut LoadState,
    notifications: &mut Notifications,
) {
    match result {
        Ok(bodies) => {
            info!(count = bodies.len(), "Loaded NEO catalog");
            notifications.push(
                NotificationKind::Info,
                "Universe loaded",
                format!("Found {} approaching asteroids", bodies.len()),
            );
            *catalog = BodyCatalog {
                bodies,
                source: DataSource::Live,
            };
            *state = LoadState::Loaded {
                source: DataSource::Live,
            };
        }
        Err(err) => {
            warn!("NEO fetch failed: {err}");
            install_demo(catalog, state, notifications);
        }
    }
}

fn install_demo(
    catalog: &mut BodyCatalog,
    state: &mut LoadState,
    notifications: &mut Notifications,
) {
    notifications.push(
        NotificationKind::Error,
        "Connection error",
        "Using demo data. Check your connection to the NASA API.",
    );
    *catalog = BodyCatalog {
        bodies: demo_bodies(),
        source: DataSource::Demo,
    };
    *state = LoadState::Loaded {
        source: DataSource::Demo,
    };
}
