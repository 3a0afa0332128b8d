use crate::api::HttpBackend;
use crate::config::load_api_config;
use shared::{ApiError, FetchState};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum FetchAction<T> {
    Begin,
    Finish(Result<T, ApiError>),
}

/// `FetchState` behind a reducer so async completions see the latest state.
#[derive(Debug, PartialEq)]
pub struct FetchStore<T>(FetchState<T>);

impl<T> Default for FetchStore<T> {
    fn default() -> Self {
        FetchStore(FetchState::default())
    }
}

impl<T: Clone> Reducible for FetchStore<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            FetchAction::Begin => next.begin(),
            FetchAction::Finish(result) => next.finish(result),
        }
        Rc::new(FetchStore(next))
    }
}

#[derive(Clone)]
pub struct UseFetchHandle<T: Clone> {
    store: UseReducerHandle<FetchStore<T>>,
    reload: Callback<()>,
}

impl<T: Clone + 'static> UseFetchHandle<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.store.0
    }

    /// Runs the fetch again; wired to Refresh and Retry buttons.
    pub fn reload(&self) -> Callback<()> {
        self.reload.clone()
    }

    /// Marks the screen busy before a call the hook does not own.
    pub fn begin(&self) {
        self.store.dispatch(FetchAction::Begin);
    }

    /// Feeds the result of such a call into the same state.
    pub fn apply(&self) -> Callback<Result<T, ApiError>> {
        let store = self.store.clone();
        Callback::from(move |result| store.dispatch(FetchAction::Finish(result)))
    }
}

/// Loads data on mount and keeps the loading/data/error triple for it.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch: F) -> UseFetchHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let store = use_reducer(FetchStore::<T>::default);

    let reload = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let store = store.clone();
            let pending = fetch();
            store.dispatch(FetchAction::Begin);
            spawn_local(async move {
                store.dispatch(FetchAction::Finish(pending.await));
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    UseFetchHandle { store, reload }
}

/// Backend client provided by the root component.
#[hook]
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>().unwrap_or_else(|| HttpBackend::new(load_api_config()))
}
