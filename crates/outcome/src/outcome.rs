use std::future::Future;

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(..))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(..))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(..) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(..) => None,
            Self::Err(error) => Some(error),
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(..) => default,
        }
    }

    pub fn fold<R>(self, on_ok: impl FnOnce(T) -> R, on_err: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    #[inline]
    pub fn map_success<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        self.map(f)
    }

    #[inline]
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        self.map_err(f)
    }

    pub fn on_ok(&self, action: impl FnOnce(&T)) {
        if let Self::Ok(value) = self {
            action(value)
        }
    }

    pub fn on_err(&self, action: impl FnOnce(&E)) {
        if let Self::Err(error) = self {
            action(error)
        }
    }

    pub fn unwrap_or_throw(self) -> Result<(), UnwrapError<E>> {
        match self {
            Self::Ok(..) => Ok(()),
            Self::Err(error) => Err(UnwrapError(error)),
        }
    }

    // stops pulling from the iterator at the first err
    pub fn combine<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        let outcomes = outcomes.into_iter();
        let mut values = Vec::with_capacity(outcomes.size_hint().0);
        for outcome in outcomes {
            match outcome {
                Self::Ok(value) => values.push(value),
                Self::Err(error) => return Outcome::Err(error),
            }
        }
        Outcome::Ok(values)
    }

    pub async fn from_async<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match action().await {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> Outcome<Option<T>, E> {
    // an absent value falls back to the default even on the ok variant
    pub fn some_or(self, default: T) -> T {
        match self {
            Self::Ok(Some(value)) => value,
            Self::Ok(None) | Self::Err(..) => default,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        Outcome::combine(iter)
    }
}

impl<T, E> std::fmt::Display for Outcome<T, E>
where
    T: std::fmt::Display,
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "ok({value})"),
            Self::Err(error) => write!(f, "err({error})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapError<E>(pub E);

impl<E> std::fmt::Display for UnwrapError<E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unwrapped an err outcome: {}", self.0)
    }
}

impl<E> std::error::Error for UnwrapError<E> where E: std::fmt::Debug + std::fmt::Display {}
