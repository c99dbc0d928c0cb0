use glam::Vec3;

use super::anchor::AnchorSource;
use super::config::RopeConfig;
use super::node::Node;
use super::solver::ConstraintSolver;
use crate::collision::CollisionQuery;
use crate::error::RopeResult;
use crate::mesh::{MeshGeometry, TubeMeshBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Nodes are allocated and hanging at rest; no tick has run yet.
    Initialized,
    Running,
}

/// One rope instance: solver, anchor tracking and tube mesh.
///
/// Construction validates the configuration, so there is no uninitialized
/// rope to observe. The host calls [`tick`](Self::tick) once per fixed
/// simulation step.
#[derive(Debug, Clone)]
pub struct RopeSimulation {
    config: RopeConfig,
    solver: ConstraintSolver,
    mesh: TubeMeshBuilder,
    anchor: Vec3,
    state: SimulationState,
    tick_count: u64,
}

impl RopeSimulation {
    pub fn new(config: RopeConfig, anchor: Vec3) -> RopeResult<Self> {
        config.validate()?;

        let node_count = config.node_count();
        let rest_distance = config.rest_distance();
        let solver = ConstraintSolver::hanging(anchor, node_count, rest_distance)?;
        let mut mesh = TubeMeshBuilder::new(config.sides)?;
        mesh.build(solver.nodes(), config.radius, anchor);

        log::debug!(
            "rope initialized: {node_count} nodes, rest distance {rest_distance}, {} substeps x {} iterations",
            config.substeps,
            config.constraint_iterations
        );

        Ok(Self {
            config,
            solver,
            mesh,
            anchor,
            state: SimulationState::Initialized,
            tick_count: 0,
        })
    }

    /// Polls the anchor, steps the solver and rebuilds the tube mesh.
    pub fn tick<A, Q>(&mut self, dt: f32, anchor: &A, query: &Q) -> &MeshGeometry
    where
        A: AnchorSource + ?Sized,
        Q: CollisionQuery + ?Sized,
    {
        self.anchor = anchor.world_position();
        self.solver.step(&self.config, self.anchor, dt, query);
        self.state = SimulationState::Running;
        self.tick_count += 1;

        self.mesh
            .build(self.solver.nodes(), self.config.radius, self.anchor)
    }

    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Anchor position read by the last tick.
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn nodes(&self) -> &[Node] {
        self.solver.nodes()
    }

    pub fn solver(&self) -> &ConstraintSolver {
        &self.solver
    }

    pub fn solver_mut(&mut self) -> &mut ConstraintSolver {
        &mut self.solver
    }

    pub fn mesh(&self) -> &MeshGeometry {
        self.mesh.geometry()
    }

    /// Indices of nodes whose integration sweep hit geometry last tick.
    pub fn contact_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.solver
            .contact_flags()
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit)
            .map(|(i, _)| i)
    }
}
