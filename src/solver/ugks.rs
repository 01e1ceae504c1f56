//! UGKS time march on a structured mesh.
//!
//! One step runs the sweeps in a fixed order, each a barrier for the next:
//!
//! 1. Refill ghost cells from the boundary conditions
//! 2. Limited slopes of `h` and `b` in every interior cell
//! 3. Interface fluxes (UGKS on interior and open faces, diffuse reflection
//!    on wall faces)
//! 4. Conservative update of `w` followed by the implicit Shakhov update of
//!    `h` and `b`
//!
//! Sweeps 2 to 4 have `_parallel` variants behind the `parallel` feature;
//! [`Solver::step`] picks them automatically when the feature is on.

use log::{debug, info, warn};

use crate::boundary::{self, BoundaryCondition, DomainBoundaries};
use crate::distribution::{heat_flux, shakhov_equilibrium};
use crate::error::{Result, UgksError};
use crate::flux::{FaceWorkspace, FluxContext, calc_flux_with_workspace, calc_wall_flux};
use crate::gas::GasModel;
use crate::mesh::{CellState, InterfaceState, MeshTopology, StructuredMesh};
use crate::reconstruction::{SlopeLimiter, reconstruct_into};
use crate::state::{ConservedState, PrimitiveState};
use crate::types::Direction;
use crate::velocity::{VelocityField, VelocityGrid};

use super::{ResidualAccumulator, RunConfig, RunSummary, SimulationParams, StepState};

/// Scratch for the relaxation targets of one cell update.
#[derive(Clone, Debug)]
struct UpdateScratch {
    h_old: Vec<f64>,
    b_old: Vec<f64>,
    h_new: Vec<f64>,
    b_new: Vec<f64>,
}

impl UpdateScratch {
    fn new(n: usize) -> Self {
        Self {
            h_old: vec![0.0; n],
            b_old: vec![0.0; n],
            h_new: vec![0.0; n],
            b_new: vec![0.0; n],
        }
    }
}

/// Steady-state UGKS driver.
#[derive(Clone, Debug)]
pub struct Solver {
    params: SimulationParams,
    mesh: StructuredMesh,
    boundaries: DomainBoundaries,
    state: StepState,
    /// Per-cell slope buffer, swapped into the cells after each direction
    slopes: Vec<(VelocityField, VelocityField)>,
    /// Conservative state before the last update
    w_old: Vec<ConservedState>,
    workspace: FaceWorkspace,
    scratch: UpdateScratch,
}

impl Solver {
    /// Build a driver, checking that every cell and face array matches the
    /// velocity grid.
    pub fn new(
        params: SimulationParams,
        mesh: StructuredMesh,
        boundaries: DomainBoundaries,
    ) -> Result<Self> {
        params.validate()?;
        let grid = &params.grid;
        for cell in mesh.cells() {
            grid.check_shape(&cell.h)?;
            grid.check_shape(&cell.b)?;
        }
        for dir in Direction::BOTH {
            for face in mesh.faces(dir) {
                grid.check_shape(&face.flux_h)?;
                grid.check_shape(&face.flux_b)?;
            }
        }

        let n_cells = mesh.cells().len();
        let slopes = (0..n_cells).map(|_| (grid.zeros(), grid.zeros())).collect();
        let workspace = FaceWorkspace::for_grid(grid);
        let scratch = UpdateScratch::new(grid.len());

        debug!(
            "UGKS solver: {}x{} cells, {}x{} velocity nodes, limiter {}, boundaries S={} E={} N={} W={}",
            mesh.nx(),
            mesh.ny(),
            grid.u_num(),
            grid.v_num(),
            params.limiter.name(),
            boundaries.south,
            boundaries.east,
            boundaries.north,
            boundaries.west
        );

        Ok(Self {
            params,
            mesh,
            boundaries,
            state: StepState::default(),
            slopes,
            w_old: vec![ConservedState::zero(); n_cells],
            workspace,
            scratch,
        })
    }

    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    #[inline]
    pub fn grid(&self) -> &VelocityGrid {
        &self.params.grid
    }

    #[inline]
    pub fn gas(&self) -> &GasModel {
        &self.params.gas
    }

    #[inline]
    pub fn mesh(&self) -> &StructuredMesh {
        &self.mesh
    }

    #[inline]
    pub fn mesh_mut(&mut self) -> &mut StructuredMesh {
        &mut self.mesh
    }

    #[inline]
    pub fn boundaries(&self) -> &DomainBoundaries {
        &self.boundaries
    }

    /// State of the time march after the last step.
    #[inline]
    pub fn state(&self) -> &StepState {
        &self.state
    }

    /// Put every cell (ghosts included) in equilibrium at `prim` and reset
    /// the march.
    pub fn initialize_uniform(&mut self, prim: &PrimitiveState) {
        self.initialize_with(|_, _| *prim);
    }

    /// Put every cell in equilibrium at `init(x, y)` of its center and reset
    /// the march.
    pub fn initialize_with<F>(&mut self, init: F)
    where
        F: Fn(f64, f64) -> PrimitiveState,
    {
        let grid = &self.params.grid;
        let gas = &self.params.gas;
        for cell in self.mesh.cells_mut() {
            let prim = init(cell.center.0, cell.center.1);
            cell.set_equilibrium(&prim, grid, gas);
        }
        for dir in Direction::BOTH {
            for face in self.mesh.faces_mut(dir) {
                face.clear();
            }
        }
        self.state = StepState::default();
    }

    /// Refill all ghost cells.
    pub fn apply_boundaries(&mut self) {
        boundary::apply_boundaries(
            &mut self.mesh,
            &self.boundaries,
            &self.params.grid,
            &self.params.gas,
        );
    }

    /// CFL time step over the interior cells.
    ///
    /// Cells with a non-finite state are skipped; an uninitialized mesh gives
    /// an infinite step.
    pub fn compute_dt(&self) -> f64 {
        let grid = &self.params.grid;
        let gas = &self.params.gas;
        let mut max_rate = 0.0_f64;
        for (i, j) in self.mesh.interior() {
            let cell = self.mesh.cell(i, j);
            let prim = cell.primitive(gas);
            let c = gas.sound_speed(&prim);
            let rate = (grid.u_max().max(prim.u.abs()) + c) / cell.length[0]
                + (grid.v_max().max(prim.v.abs()) + c) / cell.length[1];
            max_rate = max_rate.max(rate);
        }
        self.params.cfl / max_rate
    }

    /// Limited slopes of every interior cell in both directions.
    pub fn reconstruct(&mut self) {
        let topo = self.mesh.topology();
        let limiter = &self.params.limiter;
        for dir in Direction::BOTH {
            let stride = topo.stride(dir);
            let cells = self.mesh.cells();
            for (idx, (sh, sb)) in self.slopes.iter_mut().enumerate() {
                if topo.is_interior(idx) {
                    let (left, mid, right) = (&cells[idx - stride], &cells[idx], &cells[idx + stride]);
                    reconstruct_into(limiter, left, mid, right, dir, sh, sb);
                }
            }
            for (idx, (cell, (sh, sb))) in self
                .mesh
                .cells_mut()
                .iter_mut()
                .zip(self.slopes.iter_mut())
                .enumerate()
            {
                if topo.is_interior(idx) {
                    std::mem::swap(&mut cell.sh[dir], sh);
                    std::mem::swap(&mut cell.sb[dir], sb);
                }
            }
        }
    }

    /// Parallel version of [`reconstruct`](Self::reconstruct).
    #[cfg(feature = "parallel")]
    pub fn reconstruct_parallel(&mut self) {
        use rayon::prelude::*;

        let topo = self.mesh.topology();
        let limiter = self.params.limiter;
        for dir in Direction::BOTH {
            let stride = topo.stride(dir);
            let cells = self.mesh.cells();
            self.slopes
                .par_iter_mut()
                .enumerate()
                .for_each(|(idx, (sh, sb))| {
                    if topo.is_interior(idx) {
                        let (left, mid, right) =
                            (&cells[idx - stride], &cells[idx], &cells[idx + stride]);
                        reconstruct_into(&limiter, left, mid, right, dir, sh, sb);
                    }
                });
            self.mesh
                .cells_mut()
                .par_iter_mut()
                .zip(self.slopes.par_iter_mut())
                .enumerate()
                .for_each(|(idx, (cell, (sh, sb)))| {
                    if topo.is_interior(idx) {
                        std::mem::swap(&mut cell.sh[dir], sh);
                        std::mem::swap(&mut cell.sb[dir], sb);
                    }
                });
        }
    }

    /// Fluxes of every face over a step of `dt`.
    pub fn compute_fluxes(&mut self, dt: f64) {
        let topo = self.mesh.topology();
        let ctx = FluxContext::new(&self.params.grid, &self.params.gas, dt);
        let boundaries = &self.boundaries;
        let ws = &mut self.workspace;
        for dir in Direction::BOTH {
            let (cells, faces) = self.mesh.split_faces_mut(dir);
            for (f, face) in faces.iter_mut().enumerate() {
                face_flux(topo, boundaries, cells, dir, f, face, &ctx, ws);
            }
        }
    }

    /// Parallel version of [`compute_fluxes`](Self::compute_fluxes), one
    /// workspace per worker.
    #[cfg(feature = "parallel")]
    pub fn compute_fluxes_parallel(&mut self, dt: f64) {
        use rayon::prelude::*;

        let topo = self.mesh.topology();
        let ctx = FluxContext::new(&self.params.grid, &self.params.gas, dt);
        let boundaries = &self.boundaries;
        for dir in Direction::BOTH {
            let (cells, faces) = self.mesh.split_faces_mut(dir);
            faces.par_iter_mut().enumerate().for_each_init(
                || FaceWorkspace::for_grid(ctx.grid),
                |ws, (f, face)| face_flux(topo, boundaries, cells, dir, f, face, &ctx, ws),
            );
        }
    }

    /// Apply the face fluxes of a step of `dt` to every interior cell.
    ///
    /// Returns the residual, or [`UgksError::Diverged`] if a cell ends up
    /// with a non-finite or non-physical state.
    pub fn update(&mut self, dt: f64) -> Result<[f64; 4]> {
        let topo = self.mesh.topology();
        let grid = &self.params.grid;
        let gas = &self.params.gas;
        let scratch = &mut self.scratch;
        let (cells, faces) = self.mesh.split_cells_mut();
        for (idx, (cell, w_old)) in cells.iter_mut().zip(self.w_old.iter_mut()).enumerate() {
            if topo.is_interior(idx) {
                *w_old = cell.w;
                update_cell(cell, faces, topo.cell_faces(idx), grid, gas, dt, scratch);
            }
        }
        self.finish_update()
    }

    /// Parallel version of [`update`](Self::update).
    #[cfg(feature = "parallel")]
    pub fn update_parallel(&mut self, dt: f64) -> Result<[f64; 4]> {
        use rayon::prelude::*;

        let topo = self.mesh.topology();
        let grid = &self.params.grid;
        let gas = &self.params.gas;
        let (cells, faces) = self.mesh.split_cells_mut();
        cells
            .par_iter_mut()
            .zip(self.w_old.par_iter_mut())
            .enumerate()
            .for_each_init(
                || UpdateScratch::new(grid.len()),
                |scratch, (idx, (cell, w_old))| {
                    if topo.is_interior(idx) {
                        *w_old = cell.w;
                        update_cell(cell, faces, topo.cell_faces(idx), grid, gas, dt, scratch);
                    }
                },
            );
        self.finish_update()
    }

    /// Divergence check and residual, in interior cell order.
    fn finish_update(&self) -> Result<[f64; 4]> {
        let topo = self.mesh.topology();
        let gas = &self.params.gas;
        let cells = self.mesh.cells();
        let mut acc = ResidualAccumulator::new();
        for (i, j) in topo.interior() {
            let idx = topo.cell_index(i, j);
            let cell = &cells[idx];
            if !is_sane(cell, gas) {
                let iteration = self.state.iteration + 1;
                warn!(
                    "non-finite state in cell ({}, {}) at iteration {}: {:?}",
                    i - 1,
                    j - 1,
                    iteration,
                    cell.w
                );
                return Err(UgksError::Diverged {
                    iteration,
                    i: i - 1,
                    j: j - 1,
                });
            }
            acc.add(&self.w_old[idx], &cell.w);
        }
        Ok(acc.finish())
    }

    /// Advance one step of the given size.
    pub fn advance(&mut self, dt: f64) -> Result<StepState> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(UgksError::invalid_config(format!(
                "time step must be positive and finite, got {dt}"
            )));
        }

        self.apply_boundaries();
        #[cfg(feature = "parallel")]
        let residual = {
            self.reconstruct_parallel();
            self.compute_fluxes_parallel(dt);
            self.update_parallel(dt)?
        };
        #[cfg(not(feature = "parallel"))]
        let residual = {
            self.reconstruct();
            self.compute_fluxes(dt);
            self.update(dt)?
        };

        self.state.dt = dt;
        self.state.iteration += 1;
        self.state.time += dt;
        self.state.residual = residual;
        debug!(
            "step {}: dt={:.4e} res=[{:.3e}, {:.3e}, {:.3e}, {:.3e}]",
            self.state.iteration, dt, residual[0], residual[1], residual[2], residual[3]
        );
        Ok(self.state)
    }

    /// Advance one CFL-limited step.
    pub fn step(&mut self) -> Result<StepState> {
        let dt = self.compute_dt();
        self.advance(dt)
    }

    /// March until the residual tolerance or the iteration limit is reached.
    pub fn run(&mut self, config: &RunConfig) -> Result<RunSummary> {
        let start = std::time::Instant::now();
        info!(
            "UGKS run: {}x{} cells, {} velocity nodes, cfl={}, max_iterations={}, tol={:.1e}",
            self.mesh.nx(),
            self.mesh.ny(),
            self.params.grid.len(),
            self.params.cfl,
            config.max_iterations,
            config.residual_tolerance
        );

        let mut converged = false;
        for _ in 0..config.max_iterations {
            let state = self.step()?;
            if config.report_interval > 0 && state.iteration % config.report_interval == 0 {
                info!(
                    "iter {:>8} | t={:.4e} | dt={:.3e} | max res={:.3e}",
                    state.iteration,
                    state.time,
                    state.dt,
                    state.max_residual()
                );
            }
            if state.max_residual() < config.residual_tolerance {
                converged = true;
                break;
            }
        }

        let summary = RunSummary {
            iterations: self.state.iteration,
            time: self.state.time,
            residual: self.state.residual,
            converged,
            wall_time: start.elapsed().as_secs_f64(),
        };
        info!("{summary}");
        Ok(summary)
    }
}

/// Flux of face `f` along `dir`, dispatching wall faces to the
/// diffuse-reflection flux.
#[allow(clippy::too_many_arguments)]
#[inline]
fn face_flux(
    topo: MeshTopology,
    boundaries: &DomainBoundaries,
    cells: &[CellState],
    dir: Direction,
    f: usize,
    face: &mut InterfaceState,
    ctx: &FluxContext<'_>,
    ws: &mut FaceWorkspace,
) {
    let (left, right) = topo.face_cells(dir, f);
    if let Some(side) = topo.face_side(dir, f)
        && let BoundaryCondition::DiffuseWall(wall) = boundaries.get(side)
    {
        let interior = if side.interior_is_left() { left } else { right };
        calc_wall_flux(wall, &cells[interior], face, side, ctx, ws);
        return;
    }
    calc_flux_with_workspace(&cells[left], &cells[right], face, dir, ctx, ws);
}

/// Update one interior cell from the fluxes of its four faces
/// `[west, east, south, north]`.
fn update_cell(
    cell: &mut CellState,
    faces: &[Vec<InterfaceState>; 2],
    face_ids: [usize; 4],
    grid: &VelocityGrid,
    gas: &GasModel,
    dt: f64,
    scratch: &mut UpdateScratch,
) {
    let [west, east, south, north] = face_ids;
    let (fw, fe) = (&faces[0][west], &faces[0][east]);
    let (fs, fnorth) = (&faces[1][south], &faces[1][north]);
    let inv_area = 1.0 / cell.area;

    // Relaxation target at the old state
    let prim_old = cell.primitive(gas);
    let tau_old = gas.collision_time(&prim_old);
    let q = heat_flux(grid.weight(), grid.u(), grid.v(), &cell.h, &cell.b, &prim_old);
    shakhov_equilibrium(grid, &prim_old, &q, gas, &mut scratch.h_old, &mut scratch.b_old);

    let net = fw.flux - fe.flux + fs.flux - fnorth.flux;
    cell.w += net * inv_area;

    // Relaxation target at the new state, heat flux relaxed over the step
    let prim = cell.primitive(gas);
    let tau = gas.collision_time(&prim);
    let relax = 1.0 / (1.0 + 0.5 * dt / tau * gas.prandtl);
    let q = [q[0] * relax, q[1] * relax];
    shakhov_equilibrium(grid, &prim, &q, gas, &mut scratch.h_new, &mut scratch.b_new);

    let implicit = 1.0 / (1.0 + 0.5 * dt / tau);
    for k in 0..grid.len() {
        let net_h = fw.flux_h[k] - fe.flux_h[k] + fs.flux_h[k] - fnorth.flux_h[k];
        let net_b = fw.flux_b[k] - fe.flux_b[k] + fs.flux_b[k] - fnorth.flux_b[k];
        let h = cell.h[k];
        let b = cell.b[k];
        cell.h[k] = (h
            + net_h * inv_area
            + 0.5 * dt * (scratch.h_new[k] / tau + (scratch.h_old[k] - h) / tau_old))
            * implicit;
        cell.b[k] = (b
            + net_b * inv_area
            + 0.5 * dt * (scratch.b_new[k] / tau + (scratch.b_old[k] - b) / tau_old))
            * implicit;
    }
}

#[inline]
fn is_sane(cell: &CellState, gas: &GasModel) -> bool {
    cell.w.is_finite()
        && cell.primitive(gas).is_physical()
        && cell.h.is_finite()
        && cell.b.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::lid_driven_cavity;
    use crate::types::{Side, SideBoundaries};

    const TOL: f64 = 1e-12;

    fn grid() -> VelocityGrid {
        VelocityGrid::newton_cotes(16, -5.0, 5.0, 16, -5.0, 5.0).unwrap()
    }

    fn solver(boundaries: DomainBoundaries) -> Solver {
        let grid = grid();
        let mesh = StructuredMesh::uniform_rectangle(0.0, 1.0, 0.0, 1.0, 4, 4, &grid).unwrap();
        let params = SimulationParams::new(grid, GasModel::default());
        Solver::new(params, mesh, boundaries).unwrap()
    }

    fn rest() -> PrimitiveState {
        PrimitiveState::new(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_rejects_mismatched_grid() {
        let coarse = VelocityGrid::newton_cotes(8, -5.0, 5.0, 8, -5.0, 5.0).unwrap();
        let mesh = StructuredMesh::uniform_rectangle(0.0, 1.0, 0.0, 1.0, 2, 2, &coarse).unwrap();
        let params = SimulationParams::new(grid(), GasModel::default());
        let bcs = SideBoundaries::uniform(BoundaryCondition::ZeroGradient);
        let err = Solver::new(params, mesh, bcs).unwrap_err();
        assert!(matches!(err, UgksError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_configured_limiter_is_used() {
        use crate::reconstruction::StandardLimiter;

        let grid = grid();
        let mesh = StructuredMesh::uniform_rectangle(0.0, 1.0, 0.0, 1.0, 4, 4, &grid).unwrap();
        let params =
            SimulationParams::new(grid, GasModel::default()).with_limiter(StandardLimiter::Minmod);
        let s = Solver::new(params, mesh, lid_driven_cavity(0.15, rest())).unwrap();
        assert_eq!(s.params().limiter.name(), "minmod");
    }

    #[test]
    fn test_compute_dt() {
        let mut s = solver(SideBoundaries::uniform(BoundaryCondition::ZeroGradient));
        s.initialize_uniform(&rest());
        let grid = s.grid();
        let c = s.gas().sound_speed(&rest());
        let expected = 0.8 / ((grid.u_max() + c) / 0.25 + (grid.v_max() + c) / 0.25);
        assert!((s.compute_dt() - expected).abs() < TOL);
    }

    #[test]
    fn test_uninitialized_step_fails() {
        let mut s = solver(SideBoundaries::uniform(BoundaryCondition::ZeroGradient));
        assert!(s.compute_dt().is_infinite());
        assert!(matches!(s.step(), Err(UgksError::InvalidConfig(_))));
    }

    #[test]
    fn test_uniform_state_is_steady() {
        // Zero-gradient ghosts keep every cell identical, so all faces of a
        // direction carry bitwise-equal fluxes
        let prim = PrimitiveState::new(1.2, 0.1, -0.05, 0.9);
        let mut s = solver(SideBoundaries::uniform(BoundaryCondition::ZeroGradient));
        s.initialize_uniform(&prim);
        let w0 = s.mesh().cell(2, 3).w;
        for _ in 0..3 {
            let state = s.step().unwrap();
            assert_eq!(state.max_residual(), 0.0, "res {:?}", state.residual);
        }
        for (i, j) in s.mesh().interior() {
            let w = s.mesh().cell(i, j).w;
            assert_eq!(w, w0, "cell ({i}, {j}) drifted");
        }
        assert_eq!(s.state().iteration, 3);
        assert!((s.state().time - 3.0 * s.state().dt).abs() < TOL);
    }

    #[test]
    fn test_closed_cavity_conserves_mass() {
        let mut s = solver(lid_driven_cavity(0.15, rest()));
        s.initialize_with(|x, y| PrimitiveState::new(1.0 + 0.2 * x * y, 0.0, 0.0, 1.0));
        let mass0 = s.mesh().total_conserved().rho;
        for _ in 0..5 {
            s.step().unwrap();
        }
        let mass = s.mesh().total_conserved().rho;
        assert!((mass - mass0).abs() < 1e-12, "mass {mass0} -> {mass}");
    }

    #[test]
    fn test_lid_accelerates_top_row() {
        let mut s = solver(lid_driven_cavity(0.15, rest()));
        s.initialize_uniform(&rest());
        for _ in 0..3 {
            s.step().unwrap();
        }
        let ny = s.mesh().ny();
        let north = s.mesh().face(Direction::J, 1, ny);
        assert!(north.flux.rho_u < 0.0);
        for i in 1..=s.mesh().nx() {
            let prim = s.mesh().cell(i, ny).primitive(s.gas());
            assert!(prim.u > 0.0, "top cell {i} u = {}", prim.u);
        }
    }

    #[test]
    fn test_divergence_is_reported() {
        let mut s = solver(SideBoundaries::uniform(BoundaryCondition::Equilibrium(rest())));
        s.initialize_uniform(&rest());
        s.mesh_mut().cell_mut(2, 2).w.rho_e = f64::NAN;
        let err = s.step().unwrap_err();
        assert!(matches!(err, UgksError::Diverged { iteration: 1, .. }), "{err}");
    }

    #[test]
    fn test_run_stops_at_tolerance() {
        let mut s = solver(SideBoundaries::uniform(BoundaryCondition::ZeroGradient));
        s.initialize_uniform(&rest());
        let summary = s
            .run(&RunConfig::default().with_max_iterations(10).with_report_interval(1))
            .unwrap();
        assert!(summary.converged);
        assert_eq!(summary.iterations, 1);

        let mut s = solver(lid_driven_cavity(0.15, rest()));
        s.initialize_uniform(&rest());
        let summary = s
            .run(&RunConfig::default().with_max_iterations(4).with_residual_tolerance(0.0))
            .unwrap();
        assert!(!summary.converged);
        assert_eq!(summary.iterations, 4);
        assert!(summary.time > 0.0);
    }

    #[test]
    fn test_wall_faces_use_wall_flux() {
        let mut s = solver(
            SideBoundaries::uniform(BoundaryCondition::ZeroGradient)
                .with(Side::West, BoundaryCondition::DiffuseWall(rest())),
        );
        s.initialize_uniform(&PrimitiveState::new(1.0, 0.2, 0.0, 1.0));
        s.apply_boundaries();
        let dt = s.compute_dt();
        s.compute_fluxes(dt);
        // Impermeable west wall, open east side
        let west = s.mesh().face(Direction::I, 0, 1);
        assert!(west.flux.rho.abs() < 1e-14);
        let east = s.mesh().face(Direction::I, 4, 1);
        assert!(east.flux.rho > 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let init = |x: f64, y: f64| PrimitiveState::new(1.0 + 0.1 * x, 0.05 * y, 0.0, 1.0);
        let mut serial = solver(lid_driven_cavity(0.15, rest()));
        serial.initialize_with(init);
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
        for (a, b) in serial.mesh().cells().iter().zip(parallel.mesh().cells()) {
            assert_eq!(a.w, b.w);
            assert_eq!(a.h, b.h);
        }
    }
}
