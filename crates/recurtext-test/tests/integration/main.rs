mod english_corpus;
mod helpers;
mod round_trip;
mod spanish_corpus;
