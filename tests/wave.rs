use landing_wasm::wave::{
    normalized_pointer, tilt_for_pointer, FrameAdvance, FrameGate, SceneParams, WaveMesh,
    GRID_POINTS,
};

const SPEED: f32 = 0.0015;

fn expected_height(time_ms: f32, x: f32) -> f32 {
    (time_ms * SPEED + x).sin() * 0.5
}

#[test]
fn grid_shape() {
    let mesh = WaveMesh::new();
    assert_eq!(GRID_POINTS, 33);
    assert_eq!(mesh.vertex_count(), 33 * 33);
    // grid lines both ways plus one diagonal per cell, two indices per edge
    let edges = 2 * 33 * 32 + 32 * 32;
    assert_eq!(mesh.line_indices().len(), 2 * edges);
}

#[test]
fn planar_coordinates_span_the_plane() {
    let mesh = WaveMesh::new();
    assert_eq!(mesh.planar_x(0, 0), -15.0);
    assert_eq!(mesh.planar_x(0, 16), 0.0);
    assert_eq!(mesh.planar_x(0, 32), 15.0);
    // every vertex starts flat
    for row in 0..GRID_POINTS {
        for col in 0..GRID_POINTS {
            assert_eq!(mesh.height_at(row, col), 0.0);
        }
    }
}

#[test]
fn wave_heights_follow_the_sine_field() {
    let mut mesh = WaveMesh::new();
    for &t in &[0.0f32, 500.0, 10_000.0] {
        mesh.step(t, SPEED);
        for &row in &[0usize, 16, 32] {
            for &col in &[0usize, 16, 32] {
                let x = mesh.planar_x(row, col);
                let expected = expected_height(t, x);
                let got = mesh.height_at(row, col);
                assert!(
                    (got - expected).abs() < 1e-6,
                    "t={t} row={row} col={col}: {got} vs {expected}"
                );
            }
        }
    }
}

#[test]
fn x_position_acts_as_phase_offset() {
    let mut mesh = WaveMesh::new();
    mesh.step(500.0, SPEED);
    // a traveling wave: vertices at different x disagree
    assert_ne!(mesh.height_at(0, 0), mesh.height_at(0, 16));
    // ...while same-x vertices on different rows agree
    assert_eq!(mesh.height_at(0, 5), mesh.height_at(20, 5));
}

#[test]
fn frame_gate_skips_late_frames() {
    let mut gate = FrameGate::new();
    assert_eq!(gate.tick(0.0), FrameAdvance::Step { dt_ms: 0.0 });
    assert_eq!(gate.tick(16.0), FrameAdvance::Step { dt_ms: 16.0 });
    // a 100ms stall: drop the update instead of catching up
    assert_eq!(gate.tick(116.0), FrameAdvance::Skip { dt_ms: 100.0 });
    // exactly at the threshold still skips
    assert_eq!(gate.tick(148.0), FrameAdvance::Skip { dt_ms: 32.0 });
    // just under it advances again
    match gate.tick(179.9) {
        FrameAdvance::Step { dt_ms } => assert!((dt_ms - 31.9).abs() < 1e-9),
        other => panic!("expected a step, got {other:?}"),
    }
}

#[test]
fn skipped_frames_leave_the_mesh_untouched() {
    let mut mesh = WaveMesh::new();
    let mut gate = FrameGate::new();

    // the loop only mutates on Step and keeps running either way
    for now in [0.0, 10.0, 20.0] {
        if let FrameAdvance::Step { .. } = gate.tick(now) {
            mesh.step(now as f32, SPEED);
        }
    }
    let snapshot: Vec<f32> = mesh.positions().to_vec();

    match gate.tick(500.0) {
        FrameAdvance::Skip { dt_ms } => assert_eq!(dt_ms, 480.0),
        other => panic!("expected a skip, got {other:?}"),
    }
    assert_eq!(mesh.positions(), snapshot.as_slice());
}

#[test]
fn density_tiers_follow_initial_width() {
    assert_eq!(SceneParams::for_width(1920).particle_density, 120);
    assert_eq!(SceneParams::for_width(1201).particle_density, 120);
    assert_eq!(SceneParams::for_width(1200).particle_density, 80);
    assert_eq!(SceneParams::for_width(769).particle_density, 80);
    assert_eq!(SceneParams::for_width(768).particle_density, 40);
    assert_eq!(SceneParams::for_width(320).particle_density, 40);
}

#[test]
fn pointer_normalization_and_tilt() {
    assert_eq!(normalized_pointer(0.0, 0.0, 800.0, 600.0), (-1.0, -1.0));
    assert_eq!(normalized_pointer(800.0, 600.0, 800.0, 600.0), (1.0, 1.0));
    assert_eq!(normalized_pointer(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));

    let base = -std::f32::consts::FRAC_PI_2;
    assert_eq!(tilt_for_pointer(0.0, 0.0), (base, 0.0));
    let (rx, ry) = tilt_for_pointer(1.0, -1.0);
    assert!((rx - (base - 0.1)).abs() < 1e-6);
    assert!((ry - 0.1).abs() < 1e-6);
}
