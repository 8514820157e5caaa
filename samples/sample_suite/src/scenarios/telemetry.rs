use bookmark_service_client::context::ServiceContext;
use bookmark_service_client::LogLevel;

pub fn run(context: &ServiceContext) {
    println!("Scenario: telemetry");

    context.logger.write("Sample suite finished", LogLevel::Info);
    context.sink.track_event("SampleSuiteCompleted");
}
