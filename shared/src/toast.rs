/// Identifier of a toast in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub shown: bool,
}

/// Transient status messages in insertion order.
///
/// A toast is pushed hidden, shown shortly after so the CSS transition runs,
/// hidden again after its visible window and finally removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            shown: false,
        });
        id
    }

    pub fn show(&mut self, id: ToastId) {
        self.set_shown(id, true);
    }

    pub fn hide(&mut self, id: ToastId) {
        self.set_shown(id, false);
    }

    pub fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn set_shown(&mut self, id: ToastId, shown: bool) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.shown = shown;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut queue = ToastQueue::default();
        let id = queue.push("Message envoyé avec succès!");
        assert_eq!(queue.len(), 1);
        assert!(!queue.iter().next().unwrap().shown);

        queue.show(id);
        assert!(queue.iter().next().unwrap().shown);

        queue.hide(id);
        assert!(!queue.iter().next().unwrap().shown);

        queue.remove(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_toasts_are_independent() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one");
        let second = queue.push("two");
        assert_ne!(first, second);

        queue.show(second);
        queue.remove(first);

        let remaining: Vec<_> = queue.iter().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "two");
        assert!(remaining[0].shown);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut queue = ToastQueue::default();
        let id = queue.push("one");
        queue.remove(id);
        queue.show(id);
        queue.remove(id);
        assert!(queue.is_empty());
    }
}
