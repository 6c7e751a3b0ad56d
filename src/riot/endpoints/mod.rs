mod champion_mastery;
mod match_v3;
mod static_data;
mod summoner;
