// ============================================================================
// REACTIVITY - Valor compartido con notificación a subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo: los clones comparten valor y subscribers
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        let value = self.get();
        // Copia de la lista: un subscriber puede suscribir a otro sin BorrowMutError
        let subscribers: Vec<Subscriber<T>> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_all_clones() {
        let state = ReactiveState::new(1);
        let seen = Rc::new(Cell::new(0));
        {
            let seen = seen.clone();
            state.clone().subscribe(move |v| seen.set(*v));
        }
        state.set(5);
        assert_eq!(seen.get(), 5);
        assert_eq!(state.get(), 5);
    }
}
