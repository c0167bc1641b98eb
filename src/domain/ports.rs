use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

pub trait Clock: fmt::Debug + Send + Sync {
    fn instant(&self) -> DateTime<Utc>;
}

pub trait TimeProvider: Send + Sync {
    fn clock(&self) -> &dyn Clock;

    fn now(&self) -> DateTime<Utc> {
        self.clock().instant()
    }
}

pub trait IdProvider: Send + Sync {
    fn next(&self) -> Uuid;
}

impl<P: TimeProvider + ?Sized> TimeProvider for &P {
    fn clock(&self) -> &dyn Clock {
        (**self).clock()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<P: TimeProvider + ?Sized> TimeProvider for Box<P> {
    fn clock(&self) -> &dyn Clock {
        (**self).clock()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<P: TimeProvider + ?Sized> TimeProvider for Arc<P> {
    fn clock(&self) -> &dyn Clock {
        (**self).clock()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<P: IdProvider + ?Sized> IdProvider for &P {
    fn next(&self) -> Uuid {
        (**self).next()
    }
}

impl<P: IdProvider + ?Sized> IdProvider for Box<P> {
    fn next(&self) -> Uuid {
        (**self).next()
    }
}

impl<P: IdProvider + ?Sized> IdProvider for Arc<P> {
    fn next(&self) -> Uuid {
        (**self).next()
    }
}
