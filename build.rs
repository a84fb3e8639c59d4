fn main() {
    // embuild emits the ESP-IDF link arguments; host builds skip it entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
