use crate::algo::LayoutOptions;
use crate::error::Result;
use crate::points::{self, Placeable, Position, Velocity};
use nalgebra::Vector2;

mod clusters;
mod forces;

use clusters::ClusterIndex;

/// Explicit state for one layout run.
///
/// Every step computes all accelerations from the positions at the start of the step, then
/// advances every point. Nothing is shared between separate simulations.
#[derive(Debug, Clone)]
pub struct Simulation {
    positions: Vec<Vector2<f64>>,
    velocities: Vec<Vector2<f64>>,
    // Scratch buffer reused across steps.
    accelerations: Vec<Vector2<f64>>,
    clusters: ClusterIndex,
    opts: LayoutOptions,
    steps: usize,
}

impl Simulation {
    /// Validates the inputs and captures positions (velocities start at zero) and cluster
    /// membership. `opts.iterations` is ignored here; see [`Simulation::run`].
    pub fn new<T: Placeable>(points: &[T], opts: &LayoutOptions) -> Result<Self> {
        opts.validate()?;
        points::validate(points)?;

        let positions: Vec<Vector2<f64>> =
            points.iter().map(|p| p.position().to_vector()).collect();
        let n = positions.len();
        Ok(Self {
            positions,
            velocities: vec![Vector2::zeros(); n],
            accelerations: vec![Vector2::zeros(); n],
            clusters: ClusterIndex::from_points(points),
            opts: opts.clone(),
            steps: 0,
        })
    }

    pub fn step(&mut self) {
        let opts = &self.opts;
        self.accelerations.fill(Vector2::zeros());

        forces::accumulate_attraction(
            &self.positions,
            &self.clusters,
            opts.attraction,
            &mut self.accelerations,
        );
        forces::accumulate_repulsion(&self.positions, opts.repulsion, &mut self.accelerations);
        forces::integrate(
            &mut self.positions,
            &mut self.velocities,
            &self.accelerations,
            opts.dt,
            opts.damping,
            opts.max_speed,
        );

        self.steps += 1;
        tracing::trace!(step = self.steps, "force layout step");
    }

    /// Runs exactly `iterations` steps. There is no early exit on convergence.
    pub fn run(&mut self, iterations: usize) {
        let span = tracing::debug_span!(
            "force_layout",
            points = self.positions.len(),
            clusters = self.clusters.len(),
            iterations
        );
        let _enter = span.enter();

        let start = std::time::Instant::now();
        for _ in 0..iterations {
            self.step();
        }
        tracing::debug!(
            elapsed = ?start.elapsed(),
            steps_taken = self.steps,
            "force layout finished"
        );
    }

    pub fn positions(&self) -> Vec<Position> {
        self.positions.iter().map(Position::from_vector).collect()
    }

    pub fn velocities(&self) -> Vec<Velocity> {
        self.velocities.iter().map(Velocity::from_vector).collect()
    }

    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions.iter().map(Position::from_vector).collect()
    }
}

/// Runs `opts.iterations` steps and returns one final position per input point, in input order.
pub fn layout<T: Placeable>(points: &[T], opts: &LayoutOptions) -> Result<Vec<Position>> {
    let mut sim = Simulation::new(points, opts)?;
    sim.run(opts.iterations);
    Ok(sim.into_positions())
}

/// Like [`layout`], but writes the final positions back into `points`. Cluster labels are
/// never touched. On error, `points` is left unchanged.
pub fn layout_in_place<T: Placeable>(points: &mut [T], opts: &LayoutOptions) -> Result<()> {
    let positions = layout(points, opts)?;
    for (p, pos) in points.iter_mut().zip(positions) {
        p.set_position(pos);
    }
    Ok(())
}
