/// Associative merge of two adjacent windows, `self` strictly before `later`.
pub trait Combine: Copy {
    fn combine(&self, later: &Self) -> Self;
}

/// FIFO window with O(1) amortized push/pop and an O(1) fold of its contents.
///
/// Две стопки: `back` принимает новые элементы и хранит их свёртку,
/// `front` хранит суффиксные свёртки и отдаёт самые старые элементы.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T: Combine> {
    // (item, fold of item and everything after it in front)
    front: Vec<(T, T)>,
    back: Vec<T>,
    back_fold: Option<T>,
}

impl<T: Combine> Default for SlidingWindow<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Combine> SlidingWindow<T> {
    pub fn new() -> Self {
        Self {
            front: Vec::new(),
            back: Vec::new(),
            back_fold: None,
        }
    }

    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, item: T) {
        self.back_fold = Some(match &self.back_fold {
            Some(fold) => fold.combine(&item),
            None => item,
        });
        self.back.push(item);
    }

    /// Remove the oldest item.
    pub fn pop(&mut self) -> Option<T> {
        if self.front.is_empty() {
            self.flip();
        }
        self.front.pop().map(|(item, _)| item)
    }

    /// Fold of the whole window in arrival order.
    pub fn fold(&self) -> Option<T> {
        let front = self.front.last().map(|(_, fold)| *fold);
        match (front, self.back_fold) {
            (Some(f), Some(b)) => Some(f.combine(&b)),
            (f, b) => f.or(b),
        }
    }

    fn flip(&mut self) {
        // новейший элемент ложится на дно front
        while let Some(item) = self.back.pop() {
            let fold = match self.front.last() {
                Some((_, after)) => item.combine(after),
                None => item,
            };
            self.front.push((item, fold));
        }
        self.back_fold = None;
    }
}
