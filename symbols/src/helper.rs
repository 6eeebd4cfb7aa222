/// Map `items` to outputs on scoped threads, keeping their order.
///
/// Every thread builds its own state with `init` which `transformer` can then reuse between
/// items.
pub fn parallel_compute<In, Out, S, Init, F>(items: &[In], init: Init, transformer: F) -> Vec<Out>
where
    Init: Fn() -> S + Sync,
    F: Fn(&mut S, &In) -> Out + Sync,
    In: Sync,
    Out: Send,
{
    let thread_count = std::thread::available_parallelism().map_or(1, |count| count.get());
    let mut output = Vec::with_capacity(items.len());

    // for small item counts, perform single-threaded
    if items.len() < thread_count {
        let mut state = init();
        for item in items {
            output.push(transformer(&mut state, item));
        }

        return output;
    }

    // multithreaded
    std::thread::scope(|s| {
        let chunks = items.chunks(items.len().div_ceil(thread_count));
        let mut threads = Vec::with_capacity(thread_count);

        for chunk in chunks {
            let init = &init;
            let transformer = &transformer;
            let thread = s.spawn(move || {
                let mut state = init();
                let mut result = Vec::with_capacity(chunk.len());
                for item in chunk {
                    result.push(transformer(&mut state, item));
                }
                result
            });

            threads.push(thread);
        }

        for thread in threads {
            match thread.join() {
                Ok(chunk) => output.extend(chunk),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered() {
        let items: Vec<usize> = (0..1000).collect();
        let squares = parallel_compute(&items, || 0usize, |calls, x| {
            *calls += 1;
            x * x
        });

        assert_eq!(squares.len(), 1000);
        assert!(squares.iter().enumerate().all(|(idx, &sq)| sq == idx * idx));
    }

    #[test]
    fn empty() {
        let items: Vec<u8> = Vec::new();
        assert!(parallel_compute(&items, || (), |_, x| *x).is_empty());
    }
}
