use crate::state::{GalleryState, PlayerOverlay};
use crate::types::DomOperation;
use smallvec::SmallVec;

/// Tracks what the DOM currently shows and emits the operations that move it
/// to a new state
pub struct DomReconciler {
    rendered: GalleryState,
}

impl DomReconciler {
    pub fn new() -> Self {
        Self {
            rendered: GalleryState::default(),
        }
    }

    /// Calculate the DOM operations needed to display `next`
    pub fn reconcile(&mut self, next: &GalleryState) -> Vec<DomOperation> {
        let mut batcher = OperationBatcher::new();

        match (self.rendered.overlay, next.overlay) {
            (PlayerOverlay::Closed, PlayerOverlay::Closed) => {}
            (PlayerOverlay::Closed, PlayerOverlay::Open(video)) => {
                batcher.add_operation(DomOperation::MountOverlay { video });
            }
            (PlayerOverlay::Open(_), PlayerOverlay::Closed) => {
                batcher.add_operation(DomOperation::UnmountOverlay);
            }
            (PlayerOverlay::Open(current), PlayerOverlay::Open(video)) => {
                // Reselecting the playing video must not reload the player
                if current.id != video.id {
                    batcher.add_operation(DomOperation::RetargetOverlay {
                        from: current.id,
                        video,
                    });
                }
            }
        }

        match (self.rendered.toast.is_visible(), next.toast.is_visible()) {
            (false, true) => batcher.add_operation(DomOperation::ShowToast),
            (true, false) => batcher.add_operation(DomOperation::HideToast),
            _ => {}
        }

        self.rendered = *next;
        batcher.get_ordered_operations()
    }

    /// State the DOM reflects after the last reconcile
    pub fn rendered(&self) -> &GalleryState {
        &self.rendered
    }

    /// Forget the rendered state, e.g. after the DOM was rebuilt from scratch
    pub fn reset(&mut self) {
        self.rendered = GalleryState::default();
    }
}

impl Default for DomReconciler {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to batch DOM operations into a safe execution order
pub struct OperationBatcher {
    removes: SmallVec<[DomOperation; 2]>,
    updates: SmallVec<[DomOperation; 2]>,
    adds: SmallVec<[DomOperation; 2]>,
}

impl OperationBatcher {
    pub fn new() -> Self {
        Self {
            removes: SmallVec::new(),
            updates: SmallVec::new(),
            adds: SmallVec::new(),
        }
    }

    pub fn add_operation(&mut self, op: DomOperation) {
        match op {
            DomOperation::UnmountOverlay => self.removes.push(op),
            DomOperation::RetargetOverlay { .. }
            | DomOperation::ShowToast
            | DomOperation::HideToast => self.updates.push(op),
            DomOperation::MountOverlay { .. } => self.adds.push(op),
        }
    }

    /// Get operations in execution order
    /// Order: Remove -> Update -> Add
    pub fn get_ordered_operations(self) -> Vec<DomOperation> {
        let mut operations = Vec::with_capacity(self.removes.len() + self.updates.len() + self.adds.len());

        operations.extend(self.removes);
        operations.extend(self.updates);
        operations.extend(self.adds);

        operations
    }
}

impl Default for OperationBatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FEATURE, RITUALS, WEDDING};

    fn open(video: &'static crate::types::VideoRecord) -> GalleryState {
        GalleryState {
            overlay: PlayerOverlay::Open(video),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_mounts_overlay() {
        let mut reconciler = DomReconciler::new();

        let ops = reconciler.reconcile(&open(&WEDDING[1]));
        assert_eq!(ops, vec![DomOperation::MountOverlay { video: &WEDDING[1] }]);
        assert_eq!(reconciler.rendered().overlay, PlayerOverlay::Open(&WEDDING[1]));
    }

    #[test]
    fn test_switching_records_retargets() {
        let mut reconciler = DomReconciler::new();
        reconciler.reconcile(&open(&WEDDING[0]));

        let ops = reconciler.reconcile(&open(&RITUALS[0]));
        assert_eq!(
            ops,
            vec![DomOperation::RetargetOverlay {
                from: WEDDING[0].id,
                video: &RITUALS[0],
            }]
        );
    }

    #[test]
    fn test_reselecting_same_record_is_noop() {
        let mut reconciler = DomReconciler::new();
        reconciler.reconcile(&open(&FEATURE));

        assert!(reconciler.reconcile(&open(&FEATURE)).is_empty());
    }

    #[test]
    fn test_close_unmounts_overlay() {
        let mut reconciler = DomReconciler::new();
        reconciler.reconcile(&open(&FEATURE));

        let ops = reconciler.reconcile(&GalleryState::default());
        assert_eq!(ops, vec![DomOperation::UnmountOverlay]);

        // Nothing left to do once closed
        assert!(reconciler.reconcile(&GalleryState::default()).is_empty());
    }

    #[test]
    fn test_toast_visibility_changes() {
        let mut reconciler = DomReconciler::new();
        let mut state = open(&FEATURE);
        reconciler.reconcile(&state);

        let ticket = state.toast.show(0.0);
        assert_eq!(reconciler.reconcile(&state), vec![DomOperation::ShowToast]);

        // Restarting the timer keeps the toast up without touching the DOM
        let restarted = state.toast.show(1_000.0);
        assert!(reconciler.reconcile(&state).is_empty());

        state.toast.expire(ticket.generation);
        assert!(reconciler.reconcile(&state).is_empty());

        state.toast.expire(restarted.generation);
        assert_eq!(reconciler.reconcile(&state), vec![DomOperation::HideToast]);
    }

    #[test]
    fn test_reset_replays_current_state() {
        let mut reconciler = DomReconciler::new();
        let mut state = open(&WEDDING[2]);
        state.toast.show(0.0);
        reconciler.reconcile(&state);

        reconciler.reset();
        let ops = reconciler.reconcile(&state);
        assert_eq!(
            ops,
            vec![
                DomOperation::ShowToast,
                DomOperation::MountOverlay { video: &WEDDING[2] },
            ]
        );
    }

    #[test]
    fn test_operation_batching() {
        let mut batcher = OperationBatcher::new();

        batcher.add_operation(DomOperation::MountOverlay { video: &FEATURE });
        batcher.add_operation(DomOperation::ShowToast);
        batcher.add_operation(DomOperation::UnmountOverlay);

        let operations = batcher.get_ordered_operations();

        // Verify order: Remove, Update, Add
        assert!(matches!(operations[0], DomOperation::UnmountOverlay));
        assert!(matches!(operations[1], DomOperation::ShowToast));
        assert!(matches!(operations[2], DomOperation::MountOverlay { .. }));
    }
}
