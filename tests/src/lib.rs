pub mod cluster_dump_test;
pub mod polymorphic_stream_test;
pub mod utils;

#[cfg(test)]
mod tests {
    use crate::cluster_dump_test::test_cluster_dump;
    use crate::polymorphic_stream_test::test_polymorphic_stream;
    use data::writables::register_global_writables;
    use logging::initialize_test_logging;

    #[test]
    #[ntest::timeout(10000)]
    fn integration_test() {
        initialize_test_logging();
        register_global_writables();
        // Repeated startup registration must stay harmless.
        register_global_writables();

        test_polymorphic_stream();
        test_cluster_dump();
    }
}
