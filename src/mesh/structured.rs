//! Logically rectangular mesh with a one-cell ghost ring.
//!
//! Cells are addressed with padded indices `(i, j)`, `i` in `0..nx + 2` and
//! `j` in `0..ny + 2`; interior cells are `1..=nx` by `1..=ny` and the ring
//! around them holds ghost cells.
//!
//! Faces are stored per direction:
//! - I-face `(i, j)`, `i` in `0..=nx`, `j` in `0..ny`: normal `+x`, between
//!   cells `(i, j + 1)` (left) and `(i + 1, j + 1)` (right)
//! - J-face `(i, j)`, `i` in `0..nx`, `j` in `0..=ny`: normal `+y`, between
//!   cells `(i + 1, j)` (left) and `(i + 1, j + 1)` (right)
//!
//! A positive flux therefore always moves quantities toward increasing index.

use crate::error::{Result, UgksError};
use crate::state::ConservedState;
use crate::types::{Direction, Side};
use crate::velocity::VelocityGrid;

use super::{CellState, InterfaceState};

/// A face on the domain boundary with its two neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryFace {
    /// Index into the face array of the side's normal direction
    pub face: usize,
    /// Interior cell index
    pub interior: usize,
    /// Ghost cell index
    pub ghost: usize,
}

/// Index arithmetic of an `nx x ny` mesh with ghost ring.
///
/// Copyable so that sweeps can resolve neighbours while the mesh storage is
/// mutably borrowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshTopology {
    /// Interior cells along x
    pub nx: usize,
    /// Interior cells along y
    pub ny: usize,
}

impl MeshTopology {
    /// Number of cells including ghosts.
    #[inline]
    pub fn n_cells(&self) -> usize {
        (self.nx + 2) * (self.ny + 2)
    }

    /// Flat index of padded cell `(i, j)`.
    #[inline(always)]
    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        j * (self.nx + 2) + i
    }

    /// Padded `(i, j)` of a flat cell index.
    #[inline]
    pub fn cell_ij(&self, idx: usize) -> (usize, usize) {
        (idx % (self.nx + 2), idx / (self.nx + 2))
    }

    /// Whether a flat cell index is an interior cell.
    #[inline]
    pub fn is_interior(&self, idx: usize) -> bool {
        let (i, j) = self.cell_ij(idx);
        (1..=self.nx).contains(&i) && (1..=self.ny).contains(&j)
    }

    /// Flat index step between neighbours along `dir`.
    #[inline]
    pub fn stride(&self, dir: Direction) -> usize {
        match dir {
            Direction::I => 1,
            Direction::J => self.nx + 2,
        }
    }

    /// Number of faces along a direction.
    #[inline]
    pub fn face_count(&self, dir: Direction) -> usize {
        match dir {
            Direction::I => (self.nx + 1) * self.ny,
            Direction::J => self.nx * (self.ny + 1),
        }
    }

    /// Flat index of face `(i, j)` in direction `dir`.
    #[inline(always)]
    pub fn face_index(&self, dir: Direction, i: usize, j: usize) -> usize {
        match dir {
            Direction::I => j * (self.nx + 1) + i,
            Direction::J => j * self.nx + i,
        }
    }

    /// Flat indices of the left and right cells of a face.
    #[inline]
    pub fn face_cells(&self, dir: Direction, face: usize) -> (usize, usize) {
        match dir {
            Direction::I => {
                let (i, j) = (face % (self.nx + 1), face / (self.nx + 1));
                (self.cell_index(i, j + 1), self.cell_index(i + 1, j + 1))
            }
            Direction::J => {
                let (i, j) = (face % self.nx, face / self.nx);
                (self.cell_index(i + 1, j), self.cell_index(i + 1, j + 1))
            }
        }
    }

    /// Side of the domain a face lies on, if any.
    #[inline]
    pub fn face_side(&self, dir: Direction, face: usize) -> Option<Side> {
        match dir {
            Direction::I => match face % (self.nx + 1) {
                0 => Some(Side::West),
                i if i == self.nx => Some(Side::East),
                _ => None,
            },
            Direction::J => match face / self.nx {
                0 => Some(Side::South),
                j if j == self.ny => Some(Side::North),
                _ => None,
            },
        }
    }

    /// Number of boundary faces on a side.
    #[inline]
    pub fn boundary_len(&self, side: Side) -> usize {
        match side {
            Side::West | Side::East => self.ny,
            Side::South | Side::North => self.nx,
        }
    }

    /// The `k`-th boundary face of a side, counted along the side.
    pub fn boundary_face(&self, side: Side, k: usize) -> BoundaryFace {
        let (nx, ny) = (self.nx, self.ny);
        let (face, interior, ghost) = match side {
            Side::West => (
                self.face_index(Direction::I, 0, k),
                self.cell_index(1, k + 1),
                self.cell_index(0, k + 1),
            ),
            Side::East => (
                self.face_index(Direction::I, nx, k),
                self.cell_index(nx, k + 1),
                self.cell_index(nx + 1, k + 1),
            ),
            Side::South => (
                self.face_index(Direction::J, k, 0),
                self.cell_index(k + 1, 1),
                self.cell_index(k + 1, 0),
            ),
            Side::North => (
                self.face_index(Direction::J, k, ny),
                self.cell_index(k + 1, ny),
                self.cell_index(k + 1, ny + 1),
            ),
        };
        BoundaryFace {
            face,
            interior,
            ghost,
        }
    }

    /// Faces of the interior cell with flat index `idx`, as
    /// `[(I, west), (I, east), (J, south), (J, north)]` face indices.
    #[inline]
    pub fn cell_faces(&self, idx: usize) -> [usize; 4] {
        let (i, j) = self.cell_ij(idx);
        [
            self.face_index(Direction::I, i - 1, j - 1),
            self.face_index(Direction::I, i, j - 1),
            self.face_index(Direction::J, i - 1, j - 1),
            self.face_index(Direction::J, i - 1, j),
        ]
    }

    /// Iterator over padded indices of interior cells.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (nx, ny) = (self.nx, self.ny);
        (1..=ny).flat_map(move |j| (1..=nx).map(move |i| (i, j)))
    }
}

/// Uniform structured mesh.
#[derive(Clone, Debug)]
pub struct StructuredMesh {
    topo: MeshTopology,
    origin: (f64, f64),
    dx: f64,
    dy: f64,
    cells: Vec<CellState>,
    faces: [Vec<InterfaceState>; 2],
}

impl StructuredMesh {
    /// Uniform `nx x ny` mesh of `[x0, x1] x [y0, y1]` with cells sized for
    /// `grid`.
    pub fn uniform_rectangle(
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        nx: usize,
        ny: usize,
        grid: &VelocityGrid,
    ) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(UgksError::invalid_config(format!(
                "need at least one cell in each direction, got {nx}x{ny}"
            )));
        }
        if !(x1 > x0 && y1 > y0) {
            return Err(UgksError::invalid_config(format!(
                "invalid domain [{x0}, {x1}] x [{y0}, {y1}]"
            )));
        }

        let topo = MeshTopology { nx, ny };
        let dx = (x1 - x0) / nx as f64;
        let dy = (y1 - y0) / ny as f64;

        // Ghost cells sit one spacing outside the domain
        let mut cells = Vec::with_capacity(topo.n_cells());
        for j in 0..ny + 2 {
            for i in 0..nx + 2 {
                let x = x0 + (i as f64 - 0.5) * dx;
                let y = y0 + (j as f64 - 0.5) * dy;
                cells.push(CellState::new((x, y), [dx, dy], grid));
            }
        }

        let faces_i = (0..topo.face_count(Direction::I))
            .map(|_| InterfaceState::new(dy, Direction::I.normal(), grid))
            .collect();
        let faces_j = (0..topo.face_count(Direction::J))
            .map(|_| InterfaceState::new(dx, Direction::J.normal(), grid))
            .collect();

        Ok(Self {
            topo,
            origin: (x0, y0),
            dx,
            dy,
            cells,
            faces: [faces_i, faces_j],
        })
    }

    /// Index arithmetic of this mesh.
    #[inline]
    pub fn topology(&self) -> MeshTopology {
        self.topo
    }

    /// Interior cells along x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.topo.nx
    }

    /// Interior cells along y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.topo.ny
    }

    /// Lower-left corner of the domain.
    #[inline]
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    /// Cell spacing along x.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell spacing along y.
    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    #[inline(always)]
    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        self.topo.cell_index(i, j)
    }

    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> &CellState {
        &self.cells[self.topo.cell_index(i, j)]
    }

    #[inline]
    pub fn cell_mut(&mut self, i: usize, j: usize) -> &mut CellState {
        let idx = self.topo.cell_index(i, j);
        &mut self.cells[idx]
    }

    /// All cells including ghosts.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Iterator over padded indices of interior cells.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        self.topo.interior()
    }

    #[inline]
    pub fn face(&self, dir: Direction, i: usize, j: usize) -> &InterfaceState {
        &self.faces[dir][self.topo.face_index(dir, i, j)]
    }

    /// All faces along a direction.
    #[inline]
    pub fn faces(&self, dir: Direction) -> &[InterfaceState] {
        &self.faces[dir]
    }

    #[inline]
    pub fn faces_mut(&mut self, dir: Direction) -> &mut [InterfaceState] {
        &mut self.faces[dir]
    }

    /// Cells (read-only) and the faces of one direction (mutable), for flux
    /// sweeps.
    #[inline]
    pub fn split_faces_mut(&mut self, dir: Direction) -> (&[CellState], &mut [InterfaceState]) {
        (&self.cells, &mut self.faces[dir])
    }

    /// Cells (mutable) and all faces (read-only), for the update sweep.
    #[inline]
    pub fn split_cells_mut(&mut self) -> (&mut [CellState], &[Vec<InterfaceState>; 2]) {
        (&mut self.cells, &self.faces)
    }

    /// Net macroscopic inflow into interior cell `(i, j)` (padded indices)
    /// over the current step.
    pub fn net_flux(&self, i: usize, j: usize) -> ConservedState {
        let [west, east, south, north] = self.topo.cell_faces(self.topo.cell_index(i, j));
        self.faces[0][west].flux - self.faces[0][east].flux + self.faces[1][south].flux
            - self.faces[1][north].flux
    }

    /// Total conservative content of the interior cells.
    pub fn total_conserved(&self) -> ConservedState {
        let mut total = ConservedState::zero();
        for (i, j) in self.interior() {
            let cell = self.cell(i, j);
            total += cell.w * cell.area;
        }
        total
    }
}
