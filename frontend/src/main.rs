fn main() {
    budget_tracker_frontend::start();
}
