//! Integration tests for the instance buffer, picking and the field.

mod common;

use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use bevy::prelude::*;
use neowatch::field::{AsteroidField, FieldSettings, InstanceBuffer, InstanceError, hit_test};
use neowatch::orbit::OrbitConfig;
use neowatch::types::NeoId;

#[test]
fn test_oversized_update_is_rejected_without_writing() {
    let mut buffer = InstanceBuffer::with_capacity(3);
    let positions = [Vec3::X, Vec3::Y, Vec3::Z];
    buffer.update(&positions, &[1.0; 3], None).unwrap();
    assert!(buffer.take_dirty());
    let before = buffer.transforms().to_vec();

    let too_many = [Vec3::ONE; 4];
    let err = buffer.update(&too_many, &[2.0; 4], None).unwrap_err();

    assert_eq!(
        err,
        InstanceError::CapacityMismatch {
            capacity: 3,
            positions: 4
        }
    );
    assert_eq!(buffer.transforms(), before.as_slice());
    assert!(!buffer.is_dirty());
}

#[test]
fn test_mismatched_sizes_are_rejected() {
    let mut buffer = InstanceBuffer::with_capacity(2);
    let err = buffer.update(&[Vec3::X, Vec3::Y], &[1.0], None).unwrap_err();
    assert!(matches!(err, InstanceError::SizeCountMismatch { .. }));
}

#[test]
fn test_nearest_instance_wins_hit_test() {
    let mut buffer = InstanceBuffer::with_capacity(2);
    buffer
        .update(
            &[Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -5.0)],
            &[0.5, 0.5],
            None,
        )
        .unwrap();

    let ray = Ray3d::new(Vec3::ZERO, Dir3::NEG_Z);
    assert_eq!(hit_test(ray, &buffer, 1.0), Some(1));

    let miss = Ray3d::new(Vec3::new(5.0, 0.0, 0.0), Dir3::NEG_Z);
    assert_eq!(hit_test(miss, &buffer, 1.0), None);
}

#[test]
fn test_field_buffer_tracks_body_count() {
    let config = OrbitConfig::default();
    let mut field = AsteroidField::build(common::spread_bodies(6), &config, &mut common::rng());
    assert_eq!(field.buffer().capacity(), 6);
    let generation = field.generation();

    field.replace_bodies(common::spread_bodies(2), &config, &mut common::rng());

    assert_eq!(field.len(), 2);
    assert_eq!(field.buffer().capacity(), 2);
    assert_eq!(field.generation(), generation + 1);
    field.tick(0.016, 0.016, None, &FieldSettings::default()).unwrap();
}

#[test]
fn test_tick_writes_model_positions() {
    let mut field = AsteroidField::build(
        common::spread_bodies(4),
        &OrbitConfig::default(),
        &mut common::rng(),
    );

    field.tick(0.5, 0.5, None, &FieldSettings::default()).unwrap();

    for (transform, position) in field.buffer().transforms().iter().zip(field.model().positions()) {
        assert_relative_eq!(transform.translation.x, position.x);
        assert_relative_eq!(transform.translation.y, position.y);
        assert_relative_eq!(transform.translation.z, position.z);
    }
}

#[test]
fn test_pointer_hover_and_click_report_identities() {
    let mut field = AsteroidField::build(
        common::spread_bodies(3),
        &OrbitConfig::default(),
        &mut common::rng(),
    );
    field.tick(0.0, 0.0, None, &FieldSettings::default()).unwrap();

    let hovers: Arc<Mutex<Vec<Option<NeoId>>>> = Arc::default();
    let clicks: Arc<Mutex<Vec<NeoId>>> = Arc::default();
    {
        let hovers = Arc::clone(&hovers);
        let clicks = Arc::clone(&clicks);
        let picker = field.picker_mut();
        picker.on_hover(move |id| hovers.lock().unwrap().push(id.cloned()));
        picker.on_click(move |id| clicks.lock().unwrap().push(id.clone()));
    }

    // Aim straight down onto the first marker from above
    let target = field.buffer().transforms()[0].translation;
    let ray = Ray3d::new(target + Vec3::Y * 100.0, Dir3::NEG_Y);

    let hit = field.pointer_moved(Some(ray), 1.5);
    assert!(hit.is_some());
    let hit_id = field.ids()[hit.unwrap()].clone();
    assert_eq!(field.pointer_clicked(ray, 1.5), hit);
    assert_eq!(field.pointer_moved(None, 1.5), None);

    assert_eq!(
        hovers.lock().unwrap().as_slice(),
        [Some(hit_id.clone()), None]
    );
    assert_eq!(clicks.lock().unwrap().as_slice(), [hit_id]);
}
