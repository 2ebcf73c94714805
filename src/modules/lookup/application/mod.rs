mod candidate_binding;

pub use candidate_binding::CandidateBinding;
