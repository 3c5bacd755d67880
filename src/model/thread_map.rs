use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Email,
    Meeting,
    Task,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Email => "email",
            NodeKind::Meeting => "meeting",
            NodeKind::Task => "task",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Completed,
    Pending,
    Upcoming,
}

impl NodeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Completed => "completed",
            NodeStatus::Pending => "pending",
            NodeStatus::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadNode {
    pub id: String,
    pub kind: NodeKind,
    pub title: String,
    pub date: NaiveDateTime,
    pub status: NodeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

/// Lineage of a project: milestones joined by directed connections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadMap {
    pub project_id: String,
    pub nodes: Vec<ThreadNode>,
    pub connections: Vec<Connection>,
}

impl ThreadMap {
    pub fn node(&self, id: &str) -> Option<&ThreadNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Nodes in lineage order: start at the node nothing points to and follow
    /// outgoing connections. Falls back to declaration order when there are no
    /// connections. Stops on a cycle.
    pub fn path(&self) -> Vec<&ThreadNode> {
        if self.connections.is_empty() {
            return self.nodes.iter().collect();
        }

        let targets: HashSet<&str> = self.connections.iter().map(|c| c.to.as_str()).collect();
        let Some(mut current) = self.nodes.iter().find(|n| !targets.contains(n.id.as_str())) else {
            return self.nodes.iter().collect();
        };

        let mut seen = HashSet::new();
        let mut path = Vec::new();
        loop {
            if !seen.insert(current.id.as_str()) {
                break;
            }
            path.push(current);
            let next = self
                .connections
                .iter()
                .find(|c| c.from == current.id)
                .and_then(|c| self.node(&c.to));
            match next {
                Some(n) => current = n,
                None => break,
            }
        }
        path
    }
}
