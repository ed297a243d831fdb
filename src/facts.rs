//! The fixed fact pool backing the random-fact endpoint.

use rand::seq::SliceRandom;

pub const FACTS: [&str; 10] = [
    "Containers share the host kernel; there is no guest operating system to boot.",
    "The hostname inside a container usually defaults to the container ID.",
    "cgroups, the kernel feature behind container resource limits, predate Docker by several years.",
    "A container built from the scratch base image starts with zero bytes of filesystem.",
    "Each Fargate task runs in its own micro-VM, so no two tasks share a kernel.",
    "Container images are content-addressed: identical layers are stored and pulled only once.",
    "PID 1 inside a container is responsible for reaping zombie processes.",
    "An OCI image is just a stack of tarballs plus a JSON manifest.",
    "Stopping a container sends SIGTERM first and SIGKILL only after a grace period.",
    "Kubernetes pods share a network namespace, so containers in a pod reach each other on localhost.",
];

pub fn random_fact() -> &'static str {
    let mut rng = rand::thread_rng();
    FACTS.choose(&mut rng).copied().unwrap_or(FACTS[0])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn pool_is_non_empty() {
        assert!(!FACTS.is_empty());
    }

    #[test]
    fn picks_are_members_of_the_pool() {
        for _ in 0..100 {
            assert!(FACTS.contains(&random_fact()));
        }
    }

    #[test]
    fn picks_cover_multiple_facts() {
        let distinct: HashSet<&str> = (0..200).map(|_| random_fact()).collect();
        assert!(distinct.len() > 1);
    }
}
