//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The only effects this core produces are imperative focus moves.

use crate::model::SurfaceId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Call `focus()` on the surface's widget
    Focus(SurfaceId),
    /// Call `blur()` on the surface's widget
    Blur(SurfaceId),
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    ///
    /// Collapses to `None` or the single command when possible.
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        cmds.retain(|c| !c.is_none());
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::Batch(cmds) => cmds.iter().all(|c| c.is_none()),
            _ => false,
        }
    }

    /// Flatten into the ordered list of leaf effects
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => vec![],
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            leaf => vec![leaf],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellId;

    #[test]
    fn batch_collapses_trivial_cases() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(
            Cmd::batch(vec![Cmd::None, Cmd::Focus(SurfaceId::Title)]),
            Cmd::Focus(SurfaceId::Title)
        );
    }

    #[test]
    fn flatten_preserves_order() {
        let a = SurfaceId::Cell(CellId(0));
        let cmd = Cmd::Batch(vec![
            Cmd::Blur(a),
            Cmd::Batch(vec![Cmd::None, Cmd::Focus(SurfaceId::Title)]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::Blur(a), Cmd::Focus(SurfaceId::Title)]
        );
    }

    #[test]
    fn nested_empty_batch_is_none() {
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::Batch(vec![])]).is_none());
    }
}
