pub trait Deleter {
    /// # Safety
    /// `ptr` must have been handed to [`Wrapper::new`] and must not be used afterwards.
    unsafe fn delete(ptr: *mut Self) -> i32;
}

/// Owning pointer to a resource allocated by the verbs library, released once on drop.
pub struct Wrapper<T: 'static + Deleter + ?Sized>(*mut T);

impl<T: 'static + Deleter + ?Sized> Wrapper<T> {
    pub fn new(v: *mut T) -> Self {
        Self(v)
    }
}

impl<T: 'static + Deleter + ?Sized> Drop for Wrapper<T> {
    fn drop(&mut self) {
        match unsafe { Deleter::delete(self.0) } {
            0 => tracing::trace!("release {}", std::any::type_name::<T>()),
            r => tracing::error!("release {} failed: {}", std::any::type_name::<T>(), r),
        }
    }
}

impl<T: 'static + Deleter + ?Sized> std::ops::Deref for Wrapper<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        unsafe { &*self.0 }
    }
}
