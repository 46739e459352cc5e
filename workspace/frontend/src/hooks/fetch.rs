use std::future::Future;

use yew::prelude::*;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

/// Runs `fetch_fn` on mount and again whenever `deps` changes. Only the
/// result of the most recent run is applied.
#[hook]
pub fn use_fetch_with_deps<T, D, F, Fut>(deps: D, fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let generation = use_mut_ref(|| 0u64);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with(deps, move |deps| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            fetch_state.set(FetchState::Loading);

            let fut = fetch_fn(deps.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = fut.await;
                if *generation.borrow() != current {
                    log::debug!("Discarding superseded fetch #{}", current);
                    return;
                }
                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => fetch_state.set(FetchState::Error(err)),
                }
            });
            || ()
        });
    }

    fetch_state
}
