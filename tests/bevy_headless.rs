//! Headless Bevy integration tests.
//!
//! These tests verify Bevy resources and systems work correctly without GPU.

mod common;

use std::time::Duration;

use bevy::prelude::*;
use neowatch::config::{NeoWatchConfig, SceneRng};
use neowatch::field::AsteroidField;
use neowatch::loader::{
    BodyCatalog, DataSource, LoadState, NeoSourceHandle, poll_fetch, start_fetch,
};
use neowatch::neo::{DateRange, NearEarthObject, NeoSource, NetworkError, demo_bodies};
use neowatch::render::{HoveredAsteroid, SelectedAsteroid, rebuild_field, tick_field};
use neowatch::time::{SimulationClock, advance_clock};
use neowatch::types::NeoId;
use neowatch::ui::Notifications;

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// App with the field systems but none of the rendering.
fn create_field_app() -> App {
    let mut app = create_minimal_app();
    app.insert_resource(NeoWatchConfig::default())
        .insert_resource(SceneRng::new(Some(7)))
        .init_resource::<SimulationClock>()
        .init_resource::<BodyCatalog>()
        .init_resource::<AsteroidField>()
        .init_resource::<HoveredAsteroid>()
        .init_resource::<SelectedAsteroid>()
        .add_systems(Update, (rebuild_field, tick_field).chain());
    app
}

fn set_catalog(app: &mut App, bodies: Vec<NearEarthObject>) {
    app.world_mut().resource_mut::<BodyCatalog>().bodies = bodies;
}

struct CannedSource(Vec<NearEarthObject>);

impl NeoSource for CannedSource {
    fn fetch_approaching_bodies(
        &self,
        _range: &DateRange,
    ) -> Result<Vec<NearEarthObject>, NetworkError> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

impl NeoSource for FailingSource {
    fn fetch_approaching_bodies(
        &self,
        _range: &DateRange,
    ) -> Result<Vec<NearEarthObject>, NetworkError> {
        Err(NetworkError::Status { code: 429 })
    }
}

fn create_loader_app(source: Option<NeoSourceHandle>) -> App {
    let mut app = create_minimal_app();
    app.init_resource::<BodyCatalog>()
        .init_resource::<LoadState>()
        .init_resource::<Notifications>()
        .add_systems(Startup, start_fetch)
        .add_systems(Update, poll_fetch);
    if let Some(source) = source {
        app.insert_resource(source);
    }
    app
}

/// Update until the fetch finished, or give up after a couple of seconds.
fn run_until_loaded(app: &mut App) -> LoadState {
    for _ in 0..400 {
        app.update();
        let state = *app.world().resource::<LoadState>();
        if !state.is_loading() {
            return state;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("fetch did not finish");
}

#[test]
fn test_catalog_swap_rebuilds_field_with_new_capacity() {
    let mut app = create_field_app();
    set_catalog(&mut app, common::spread_bodies(5));
    app.update();

    let (len, capacity, first_generation) = {
        let field = app.world().resource::<AsteroidField>();
        (field.len(), field.buffer().capacity(), field.generation())
    };
    assert_eq!(len, 5);
    assert_eq!(capacity, 5);

    set_catalog(&mut app, common::spread_bodies(2));
    app.update();

    let field = app.world().resource::<AsteroidField>();
    assert_eq!(field.len(), 2);
    assert_eq!(field.buffer().capacity(), 2);
    assert!(field.generation() > first_generation);
}

#[test]
fn test_field_is_not_rebuilt_without_catalog_change() {
    let mut app = create_field_app();
    set_catalog(&mut app, common::spread_bodies(3));
    app.update();
    let generation = app.world().resource::<AsteroidField>().generation();

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(
        app.world().resource::<AsteroidField>().generation(),
        generation
    );
}

#[test]
fn test_catalog_swap_clears_stale_selection() {
    let mut app = create_field_app();
    set_catalog(&mut app, common::spread_bodies(3));
    app.update();

    app.world_mut().resource_mut::<SelectedAsteroid>().id = Some(NeoId::new("spread-2"));
    app.world_mut().resource_mut::<HoveredAsteroid>().id = Some(NeoId::new("spread-1"));
    set_catalog(&mut app, common::spread_bodies(2));
    app.update();

    assert_eq!(app.world().resource::<SelectedAsteroid>().id, None);
    assert_eq!(app.world().resource::<HoveredAsteroid>().id, None);
}

#[test]
fn test_field_advances_with_clock() {
    let mut app = create_field_app();
    set_catalog(&mut app, common::spread_bodies(3));
    app.update();
    let before = app.world().resource::<AsteroidField>().model().positions().to_vec();

    app.world_mut().resource_mut::<SimulationClock>().delta = 0.5;
    app.update();

    let field = app.world().resource::<AsteroidField>();
    assert_ne!(field.model().positions(), before.as_slice());
}

#[test]
fn test_paused_clock_does_not_advance() {
    let mut app = create_minimal_app();
    app.insert_resource(SimulationClock {
        paused: true,
        ..default()
    })
    .add_systems(PreUpdate, advance_clock);

    for _ in 0..5 {
        app.update();
    }

    let clock = app.world().resource::<SimulationClock>();
    assert_eq!(clock.elapsed, 0.0);
    assert_eq!(clock.delta, 0.0);
}

#[test]
fn test_loader_installs_fetched_bodies() {
    let bodies = common::spread_bodies(4);
    let mut app = create_loader_app(Some(NeoSourceHandle::new(CannedSource(bodies.clone()))));

    let state = run_until_loaded(&mut app);

    assert_eq!(state, LoadState::Loaded { source: DataSource::Live });
    let catalog = app.world().resource::<BodyCatalog>();
    assert_eq!(catalog.bodies, bodies);
    assert_eq!(app.world().resource::<Notifications>().len(), 1);
}

#[test]
fn test_loader_falls_back_to_demo_on_error() {
    let mut app = create_loader_app(Some(NeoSourceHandle::new(FailingSource)));

    let state = run_until_loaded(&mut app);

    assert_eq!(state, LoadState::Loaded { source: DataSource::Demo });
    assert_eq!(app.world().resource::<BodyCatalog>().bodies, demo_bodies());
}

#[test]
fn test_loader_without_source_uses_demo() {
    let mut app = create_loader_app(None);
    app.update();

    let state = *app.world().resource::<LoadState>();
    assert_eq!(state, LoadState::Loaded { source: DataSource::Demo });
}
