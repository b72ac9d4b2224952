use crate::outcome::Outcome;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Outcome::Ok(value) => Iter { inner: Some(value) },
            _ => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Outcome::Ok(value) => IterMut { inner: Some(value) },
            _ => IterMut { inner: None },
        }
    }

    pub fn iter_error(&self) -> Iter<'_, E> {
        match self {
            Outcome::Err(error) => Iter { inner: Some(error) },
            _ => Iter { inner: None },
        }
    }
}
