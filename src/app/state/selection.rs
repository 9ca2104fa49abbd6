use crate::core::NodeId;
use std::collections::HashSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Node-IDs (Arc für O(1)-Clone in RenderScene)
    pub selected_node_ids: Arc<HashSet<NodeId>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_node_ids: Arc::new(HashSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf die HashSet zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut HashSet<NodeId> {
        Arc::make_mut(&mut self.selected_node_ids)
    }

    /// Prüft, ob ein Node selektiert ist.
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.selected_node_ids.contains(&node_id)
    }

    /// Selektierte IDs in aufsteigender Reihenfolge.
    pub fn sorted_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.selected_node_ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
