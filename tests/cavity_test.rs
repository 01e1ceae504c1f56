//! Lid-driven cavity at Kn = 0.075.
//!
//! Short runs on a coarse mesh: the lid drags the top row, momentum diffuses
//! downward, and the closed box conserves mass.

use ugks_rs::{
    Direction, GasModel, PrimitiveState, RunConfig, SimulationParams, Solver, StructuredMesh,
    UgksError, VelocityGrid, lid_driven_cavity,
};

const LID_U: f64 = 0.15;

fn rest() -> PrimitiveState {
    PrimitiveState::new(1.0, 0.0, 0.0, 1.0)
}

fn cavity(n: usize) -> Solver {
    let grid = VelocityGrid::newton_cotes(24, -5.0, 5.0, 24, -5.0, 5.0).unwrap();
    let mesh = StructuredMesh::uniform_rectangle(0.0, 1.0, 0.0, 1.0, n, n, &grid).unwrap();
    let params = SimulationParams::new(grid, GasModel::default());
    let mut solver = Solver::new(params, mesh, lid_driven_cavity(LID_U, rest())).unwrap();
    solver.initialize_uniform(&rest());
    solver
}

#[test]
fn test_lid_drives_top_row() {
    let mut solver = cavity(8);
    solver.step().unwrap();

    // x-momentum enters through the lid: negative flux along +y
    let ny = solver.mesh().ny();
    for i in 0..solver.mesh().nx() {
        let lid = solver.mesh().face(Direction::J, i, ny);
        assert!(lid.flux.rho_u < 0.0, "lid face {i}: {}", lid.flux.rho_u);
    }

    for _ in 0..9 {
        solver.step().unwrap();
    }
    let gas = *solver.gas();
    for i in 1..=solver.mesh().nx() {
        let u = solver.mesh().cell(i, ny).primitive(&gas).u;
        assert!(u > 0.0 && u < LID_U, "top cell {i}: u = {u}");
    }
}

#[test]
fn test_momentum_diffuses_downward() {
    let mut solver = cavity(8);
    for _ in 0..5 {
        solver.step().unwrap();
    }
    // Face between the top row and the row below, mid-cavity
    let ny = solver.mesh().ny();
    let face = solver.mesh().face(Direction::J, 3, ny - 1);
    assert!(face.flux.rho_u < 0.0, "interior x-momentum flux {}", face.flux.rho_u);

    // The top row moves faster than the row below
    let gas = *solver.gas();
    let top = solver.mesh().cell(4, ny).primitive(&gas).u;
    let below = solver.mesh().cell(4, ny - 1).primitive(&gas).u;
    assert!(top > below, "top {top}, below {below}");
}

#[test]
fn test_closed_cavity_conserves_mass() {
    let mut solver = cavity(6);
    let before = solver.mesh().total_conserved();
    for _ in 0..20 {
        solver.step().unwrap();
    }
    let after = solver.mesh().total_conserved();
    assert!(
        (after.rho - before.rho).abs() < 1e-12 * before.rho,
        "mass {} -> {}",
        before.rho,
        after.rho
    );
    // The lid does work on the gas
    assert!(after.rho_e > before.rho_e);
}

#[test]
fn test_run_reports_progress() {
    let mut solver = cavity(4);
    let config = RunConfig::default()
        .with_max_iterations(15)
        .with_residual_tolerance(1e-12)
        .with_report_interval(5);
    let summary = solver.run(&config).unwrap();

    assert!(!summary.converged);
    assert_eq!(summary.iterations, 15);
    assert!(summary.residual.iter().all(|r| r.is_finite() && *r > 0.0));
    assert!((summary.time - solver.state().time).abs() < 1e-15);
    assert!(summary.to_string().starts_with("stopped after 15 steps"));
}

#[test]
fn test_excessive_cfl_diverges_or_stays_finite() {
    // A wildly unstable step must surface as an error, never as NaN in the mesh
    let mut solver = cavity(4);
    match solver.advance(50.0) {
        Ok(state) => assert!(state.residual.iter().all(|r| r.is_finite())),
        Err(err) => assert!(matches!(err, UgksError::Diverged { iteration: 1, .. }), "{err}"),
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_sweeps_match_serial() {
    let mut serial = cavity(6);
    for _ in 0..3 {
        serial.step().unwrap();
    }
    let mut parallel = serial.clone();

    let dt = serial.compute_dt();
    serial.apply_boundaries();
    serial.reconstruct();
    serial.compute_fluxes(dt);
    let res_serial = serial.update(dt).unwrap();

    parallel.apply_boundaries();
    parallel.reconstruct_parallel();
    parallel.compute_fluxes_parallel(dt);
    let res_parallel = parallel.update_parallel(dt).unwrap();

    assert_eq!(res_serial, res_parallel);
    for dir in Direction::BOTH {
        for (a, b) in serial.mesh().faces(dir).iter().zip(parallel.mesh().faces(dir)) {
            assert_eq!(a.flux, b.flux);
        }
    }
    for (a, b) in serial.mesh().cells().iter().zip(parallel.mesh().cells()) {
        assert_eq!(a.w, b.w);
    }
}
