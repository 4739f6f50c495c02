mod proposal_lock;
