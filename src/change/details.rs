/// Values observed immediately before and after running an action.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeDetails<V> {
    pub actual_before: V,
    pub actual_after: V,
}

impl<V: PartialEq> ChangeDetails<V> {
    pub fn capture<F>(accessor: &mut F, action: &mut dyn FnMut()) -> Self
    where
        F: FnMut() -> V + ?Sized,
    {
        let actual_before = accessor();
        action();
        let actual_after = accessor();
        Self {
            actual_before,
            actual_after,
        }
    }

    pub fn changed(&self) -> bool {
        self.actual_before != self.actual_after
    }
}
